//! The Pony lexer - turns a source buffer into a token stream.

mod comments;
mod escape;
mod identifiers;
mod numbers;
mod reader;
mod strings;

use std::rc::Rc;

use reader::SourceReader;

use crate::diagnostics::{Diagnostic, Position};
use crate::syntax::interner::StringTable;
use crate::syntax::source::Source;
use crate::syntax::symbol::Symbol;
use crate::syntax::token::Token;
use crate::syntax::token_id::{MAX_SYMBOL_LENGTH, SYMBOLS, TokenId};

/// Pull-style scanner over one source buffer.
///
/// `next_token` always produces a token; lexical errors are reported to the
/// diagnostic sink and surface in-band as `TokenId::LexError` tokens, so a
/// parser can keep pulling. Once end of input is reached, every further call
/// returns an `Eof` token at the same position.
#[derive(Debug, Clone)]
pub struct Lexer {
    reader: SourceReader,
    strings: StringTable,
    diagnostics: Vec<Diagnostic>,
    /// Scratch text of the token being built; reset between tokens.
    buffer: Vec<u8>,
    /// True until the first token after a line break is emitted.
    newline: bool,
    token_line: usize,
    token_column: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Self::from_source(Rc::new(source))
    }

    /// Lex an anonymous snippet. Handy for tests and tools.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_source(Source::from_text(text))
    }

    fn from_source(source: Rc<Source>) -> Self {
        Self {
            reader: SourceReader::new(source),
            strings: StringTable::new(),
            diagnostics: Vec::new(),
            buffer: Vec::new(),
            newline: true,
            token_line: 1,
            token_column: 1,
        }
    }

    /// Get the next token from the input.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_line = self.reader.line();
            self.token_column = self.reader.column();
            self.buffer.clear();

            if self.reader.is_eof() {
                let token = self.make_token(TokenId::Eof);
                self.newline = false;
                return token;
            }

            let token = match self.reader.peek() {
                b'\n' => {
                    self.newline = true;
                    self.reader.consume(1);
                    continue;
                }
                b'\r' | b'\t' | b' ' => {
                    self.reader.consume(1);
                    continue;
                }
                b'/' => match self.slash() {
                    Some(token) => token,
                    None => continue, // comment, nothing to emit
                },
                b'"' => self.string(),
                b'\'' => self.character(),
                b'$' => self.test_identifier(),
                c if c.is_ascii_digit() => self.number(),
                c if c.is_ascii_alphabetic() || c == b'_' => self.identifier(),
                _ => self.symbol(),
            };

            self.newline = false;
            return token;
        }
    }

    /// Lex the whole source, final `Eof` token included.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.id == TokenId::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    pub fn interner(&self) -> &StringTable {
        &self.strings
    }

    pub fn resolve_symbol(&self, symbol: Symbol) -> &str {
        self.strings.resolve(symbol)
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Match a symbol at the cursor. Table order provides longest-match;
    /// the newline remap is applied after lookup, not during it.
    fn symbol(&mut self) -> Token {
        let mut lookahead = [0u8; MAX_SYMBOL_LENGTH];
        for (i, byte) in lookahead.iter_mut().enumerate() {
            *byte = self.reader.peek_n(i + 1);
        }

        for (text, id) in SYMBOLS {
            if lookahead.starts_with(text.as_bytes()) {
                self.reader.consume(text.len());
                return self.make_token(newline_symbol(*id, self.newline));
            }
        }

        self.report_error(format!("Unrecognized character: {}", lookahead[0] as char));
        self.reader.consume(1);
        self.make_token(TokenId::LexError)
    }

    fn token_position(&self) -> Position {
        Position::new(self.token_line, self.token_column)
    }

    /// Make a token with the given kind and no payload.
    pub(super) fn make_token(&self, id: TokenId) -> Token {
        Token::new(id, Rc::clone(self.reader.source()), self.token_position())
    }

    /// Make a token whose payload is the interned scratch-buffer text.
    pub(super) fn make_token_with_text(&mut self, id: TokenId) -> Token {
        let text = String::from_utf8_lossy(&self.buffer);
        let symbol = self.strings.intern(&text);
        Token::with_symbol(
            id,
            symbol,
            Rc::clone(self.reader.source()),
            self.token_position(),
        )
    }

    pub(super) fn make_int_token(&self, value: u128) -> Token {
        Token::with_int(
            TokenId::Int,
            value,
            Rc::clone(self.reader.source()),
            self.token_position(),
        )
    }

    pub(super) fn make_float_token(&self, value: f64) -> Token {
        Token::with_float(
            TokenId::Float,
            value,
            Rc::clone(self.reader.source()),
            self.token_position(),
        )
    }

    /// Report an error anchored at the current token's first byte.
    pub(super) fn report_error(&mut self, message: impl Into<String>) {
        let (line, column) = (self.token_line, self.token_column);
        self.report_error_at(line, column, message);
    }

    pub(super) fn report_error_at(
        &mut self,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic::error(message)
            .with_file(self.reader.source().origin())
            .with_position(Position::new(line, column));
        self.diagnostics.push(diagnostic);
    }
}

/// Swap in the newline form of a token kind when it opens a line. Keeps the
/// call/grouping, index/list and binary/unary distinctions visible to the
/// parser.
fn newline_symbol(id: TokenId, newline: bool) -> TokenId {
    if !newline {
        return id;
    }

    match id {
        TokenId::LParen => TokenId::LParenNew,
        TokenId::LSquare => TokenId::LSquareNew,
        TokenId::Minus => TokenId::MinusNew,
        _ => id,
    }
}
