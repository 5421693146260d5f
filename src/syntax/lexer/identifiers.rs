//! Identifier, keyword and test-identifier scanning.

use crate::syntax::token::Token;
use crate::syntax::token_id::{TokenId, lookup_keyword, lookup_test_keyword};

use super::Lexer;

impl Lexer {
    /// Process an identifier, the leading character of which has been seen
    /// but not consumed. Keyword spellings demote to keyword tokens with no
    /// text payload.
    pub(super) fn identifier(&mut self) -> Token {
        let len = self.read_identifier_tail();
        self.reader.consume(len);

        if let Some(id) = self.buffered_keyword(lookup_keyword) {
            return self.make_token(id);
        }

        self.make_token_with_text(TokenId::Ident)
    }

    /// Process a test identifier, the leading `$` of which has been seen
    /// but not consumed. On a miss the tail stays unconsumed.
    pub(super) fn test_identifier(&mut self) -> Token {
        self.reader.consume(1);
        self.buffer.push(b'$');
        let len = self.read_identifier_tail();

        if let Some(id) = self.buffered_keyword(lookup_test_keyword) {
            self.reader.consume(len);
            return self.make_token(id);
        }

        self.report_error("Unrecognized character: $");
        self.make_token(TokenId::LexError)
    }

    /// Run a keyword lookup over the buffered token text.
    fn buffered_keyword(&self, lookup: fn(&str) -> Option<TokenId>) -> Option<TokenId> {
        let text = String::from_utf8_lossy(&self.buffer);
        lookup(&text)
    }

    /// Read the maximal identifier run into the token text without
    /// consuming it from the source. Returns the length read.
    fn read_identifier_tail(&mut self) -> usize {
        let mut len = 0;

        loop {
            let c = self.reader.peek_n(len + 1);

            if c != b'_' && c != b'\'' && !c.is_ascii_alphanumeric() {
                break;
            }

            self.buffer.push(c);
            len += 1;
        }

        len
    }
}
