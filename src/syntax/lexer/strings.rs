//! String and character literal scanning.

use crate::syntax::token::Token;
use crate::syntax::token_id::TokenId;

use super::Lexer;

impl Lexer {
    /// Process a string literal. The leading `"` has been seen but not
    /// consumed; three quotes in a row hand off to the triple-quoted form.
    pub(super) fn string(&mut self) -> Token {
        if self.reader.peek_n(2) == b'"' && self.reader.peek_n(3) == b'"' {
            return self.triple_string();
        }

        self.reader.consume(1); // leading "

        loop {
            if self.reader.is_eof() {
                return self.literal_doesnt_terminate();
            }

            match self.reader.peek() {
                b'"' => {
                    self.reader.consume(1);
                    return self.make_token_with_text(TokenId::String);
                }
                b'\\' => {
                    // Bad escapes are already reported; they contribute
                    // nothing and scanning carries on.
                    if let Some(value) = self.escape(true) {
                        self.append_utf8(value);
                    }
                }
                c => {
                    self.buffer.push(c);
                    self.reader.consume(1);
                }
            }
        }
    }

    /// Process a triple-quoted string. The leading `"""` has been seen but
    /// not consumed. Escapes are not interpreted; every byte is literal.
    fn triple_string(&mut self) -> Token {
        self.reader.consume(3);

        loop {
            if self.reader.is_eof() {
                return self.literal_doesnt_terminate();
            }

            let c = self.reader.peek();

            if c == b'"' && self.reader.peek_n(2) == b'"' && self.reader.peek_n(3) == b'"' {
                self.reader.consume(3);

                // Triple strings can end with 3 or more quotes; the extras
                // belong to the string contents.
                while self.reader.peek() == b'"' {
                    self.buffer.push(b'"');
                    self.reader.consume(1);
                }

                self.normalize_triple_string();
                return self.make_token_with_text(TokenId::String);
            }

            self.reader.consume(1);
            self.buffer.push(c);
        }
    }

    /// Strip the longest common leading indent from every line of a
    /// triple-quoted string, then drop a leading empty line if present.
    fn normalize_triple_string(&mut self) {
        if self.buffer.is_empty() || !self.buffer.contains(&b'\n') {
            return;
        }

        // Common indent across lines that have content. A line holding only
        // a line break never lowers the minimum.
        let mut indent = self.buffer.len();
        let mut indent_this_line = 0;
        let mut in_leading_ws = true;

        for &c in &self.buffer {
            if in_leading_ws {
                if c == b' ' || c == b'\t' {
                    indent_this_line += 1;
                } else if c != b'\r' && c != b'\n' {
                    indent = indent.min(indent_this_line);
                    in_leading_ws = false;
                }
            }

            if c == b'\n' {
                indent_this_line = 0;
                in_leading_ws = true;
            }
        }

        if indent > 0 {
            let mut compacted = Vec::with_capacity(self.buffer.len());

            for line in self.buffer.split_inclusive(|&b| b == b'\n') {
                if line.first() == Some(&b'\n') {
                    compacted.extend_from_slice(line);
                } else {
                    let trim = line.len().min(indent);
                    compacted.extend_from_slice(&line[trim..]);
                }
            }

            self.buffer = compacted;
        }

        if self.buffer.starts_with(b"\r\n") {
            self.buffer.drain(..2);
        } else if self.buffer.first() == Some(&b'\n') {
            self.buffer.drain(..1);
        }
    }

    /// Process a character literal. The leading `'` has been seen but not
    /// consumed. Each byte shifts in big-endian; bytes past 16 fall off the
    /// top silently.
    pub(super) fn character(&mut self) -> Token {
        self.reader.consume(1); // leading '
        let mut value: u128 = 0;

        loop {
            if self.reader.is_eof() {
                return self.literal_doesnt_terminate();
            }

            let byte = match self.reader.peek() {
                b'\'' => {
                    self.reader.consume(1);
                    return self.make_int_token(value);
                }
                b'\\' => self.escape(false),
                c => {
                    self.reader.consume(1);
                    Some(u32::from(c))
                }
            };

            // Bad escapes are already reported; they contribute nothing.
            if let Some(v) = byte {
                value = (value << 8) | u128::from(v & 0xFF);
            }
        }
    }

    /// Report the current literal as unterminated and give up on the rest
    /// of the input.
    pub(super) fn literal_doesnt_terminate(&mut self) -> Token {
        self.report_error("Literal doesn't terminate");
        self.reader.drain();
        self.make_token(TokenId::LexError)
    }
}
