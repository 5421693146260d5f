use std::fmt;
use std::rc::Rc;

use crate::diagnostics::Position;
use crate::syntax::interner::StringTable;
use crate::syntax::source::Source;
use crate::syntax::symbol::Symbol;
use crate::syntax::token_id::TokenId;

/// Payload attached to a token, if any. Identifier and string tokens carry
/// an interned symbol; integer and character literals carry a 128-bit
/// value; real literals carry a double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    None,
    String(Symbol),
    Int(u128),
    Float(f64),
}

/// One lexical unit: a kind, an optional payload, and the position of its
/// first byte in the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub value: TokenValue,
    pub source: Rc<Source>,
    pub position: Position,
}

impl Token {
    pub fn new(id: TokenId, source: Rc<Source>, position: Position) -> Self {
        Self {
            id,
            value: TokenValue::None,
            source,
            position,
        }
    }

    pub fn with_symbol(
        id: TokenId,
        symbol: Symbol,
        source: Rc<Source>,
        position: Position,
    ) -> Self {
        Self {
            id,
            value: TokenValue::String(symbol),
            source,
            position,
        }
    }

    pub fn with_int(id: TokenId, value: u128, source: Rc<Source>, position: Position) -> Self {
        Self {
            id,
            value: TokenValue::Int(value),
            source,
            position,
        }
    }

    pub fn with_float(id: TokenId, value: f64, source: Rc<Source>, position: Position) -> Self {
        Self {
            id,
            value: TokenValue::Float(value),
            source,
            position,
        }
    }

    /// The interned payload, for identifier and string tokens.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.value {
            TokenValue::String(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<u128> {
        match self.value {
            TokenValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self.value {
            TokenValue::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the text content of a token.
    ///
    /// Interned payloads resolve through the given string table; kinds with
    /// a fixed spelling return it; numeric and sentinel kinds return `None`.
    pub fn token_text<'a>(&self, strings: &'a StringTable) -> Option<&'a str> {
        if let Some(symbol) = self.symbol() {
            return Some(strings.resolve(symbol));
        }

        self.id.canonical_text()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}", self.id)?;
        match self.value {
            TokenValue::None => {}
            TokenValue::String(symbol) => write!(f, ", sym#{}", symbol.as_u32())?,
            TokenValue::Int(value) => write!(f, ", {}", value)?,
            TokenValue::Float(value) => write!(f, ", {}", value)?,
        }
        write!(f, ", {})", self.position)
    }
}
