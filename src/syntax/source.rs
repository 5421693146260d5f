//! A source buffer: an origin label plus an immutable text buffer.

use std::rc::Rc;

/// An in-memory compilation unit. The buffer is immutable for the lifetime
/// of the `Source` and is addressed by 0-based byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    origin: String,
    content: String,
}

impl Source {
    pub fn new(origin: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            content: content.into(),
        }
    }

    /// Convenience for tests and tools that lex anonymous snippets.
    pub fn from_text(content: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new("<text>", content))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
