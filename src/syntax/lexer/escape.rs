//! Escape sequences and UTF-8 encoding of code points.

use super::Lexer;

impl Lexer {
    /// Process a string or character escape sequence, the leading `\` of
    /// which has been seen but not consumed. Errors are reported at the
    /// backslash. Returns the escape value, or `None` after reporting.
    pub(super) fn escape(&mut self, unicode_allowed: bool) -> Option<u32> {
        let line = self.reader.line();
        let column = self.reader.column();
        let start = self.reader.offset();

        let c = self.reader.peek_n(2);
        // A trailing backslash at end of input still lands in the invalid
        // arm below, with only the backslash consumed.
        let available = self.reader.remaining().min(2);
        self.reader.consume(available);

        let hex_digits = match c {
            b'x' => 2,
            b'u' if unicode_allowed => 4,
            b'U' if unicode_allowed => 6,
            _ => 0,
        };

        if hex_digits > 0 {
            return match self.read_hex_escape(hex_digits) {
                Ok(value) if value <= 0x10FFFF => Some(value),
                Ok(_) => {
                    let text = self.escape_text(start, self.reader.offset() - start);
                    self.report_error_at(
                        line,
                        column,
                        format!(
                            "Escape sequence \"{}\" exceeds unicode range (0x10FFFF)",
                            text
                        ),
                    );
                    None
                }
                Err(examined) => {
                    let text = self.escape_text(start, examined);
                    self.report_error_at(
                        line,
                        column,
                        format!(
                            "Invalid escape sequence \"{}\", {} hex digits required",
                            text, hex_digits
                        ),
                    );
                    None
                }
            };
        }

        let value = match c {
            b'a' => 0x07,
            b'b' => 0x08,
            b'e' => 0x1B,
            b'f' => 0x0C,
            b'n' => 0x0A,
            b'r' => 0x0D,
            b't' => 0x09,
            b'v' => 0x0B,
            b'"' => 0x22,
            b'\'' => 0x27,
            b'\\' => 0x5C,
            b'0' => 0x00,
            _ => {
                let text = self.escape_text(start, 2);
                self.report_error_at(
                    line,
                    column,
                    format!("Invalid escape sequence \"{}\"", text),
                );
                return None;
            }
        };

        Some(value)
    }

    /// Read exactly `digits` hex digits and return the accumulated value.
    /// On a bad digit, returns the number of bytes examined so far (the
    /// two-byte prefix plus the digits read) without reporting.
    fn read_hex_escape(&mut self, digits: u32) -> Result<u32, usize> {
        let mut value: u32 = 0;
        let mut examined = 2usize;

        for _ in 0..digits {
            let c = self.reader.peek();
            let digit = match c {
                b'0'..=b'9' => u32::from(c - b'0'),
                b'a'..=b'f' => u32::from(c - b'a' + 10),
                b'A'..=b'F' => u32::from(c - b'A' + 10),
                _ => return Err(examined),
            };

            examined += 1;
            self.reader.consume(1);
            value = (value << 4) + digit;
        }

        Ok(value)
    }

    /// Append the UTF-8 encoding of a code point to the token text.
    pub(super) fn append_utf8(&mut self, value: u32) {
        debug_assert!(value <= 0x10FFFF);

        if value <= 0x7F {
            self.buffer.push(value as u8);
        } else if value <= 0x7FF {
            self.buffer.push(0xC0 | (value >> 6) as u8);
            self.buffer.push(0x80 | (value & 0x3F) as u8);
        } else if value <= 0xFFFF {
            self.buffer.push(0xE0 | (value >> 12) as u8);
            self.buffer.push(0x80 | ((value >> 6) & 0x3F) as u8);
            self.buffer.push(0x80 | (value & 0x3F) as u8);
        } else {
            self.buffer.push(0xF0 | (value >> 18) as u8);
            self.buffer.push(0x80 | ((value >> 12) & 0x3F) as u8);
            self.buffer.push(0x80 | ((value >> 6) & 0x3F) as u8);
            self.buffer.push(0x80 | (value & 0x3F) as u8);
        }
    }

    /// Escape text as scanned, for error messages.
    fn escape_text(&self, start: usize, len: usize) -> String {
        let bytes = self.reader.source().bytes();
        let end = (start + len).min(bytes.len());
        String::from_utf8_lossy(&bytes[start..end]).into_owned()
    }
}
