//! String interning table for identifier and string-literal payloads.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash, Hasher, RandomState},
};

use crate::syntax::symbol::Symbol;

/// Byte range of one interned string inside the shared storage.
#[derive(Debug, Clone, Copy)]
struct Entry {
    start: usize,
    end: usize,
}

/// Deduplicating string store. All interned text lives in one `String`;
/// symbols index into it. Interned entries are never removed.
#[derive(Debug, Clone)]
pub struct StringTable {
    hasher: RandomState,
    buckets: HashMap<u64, Vec<Symbol>>,
    entries: Vec<Entry>,
    storage: String,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: HashMap::default(),
            entries: Vec::new(),
            storage: String::new(),
        }
    }

    pub fn with_capacity(symbol_capacity: usize, storage_bytes: usize) -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: HashMap::with_capacity(symbol_capacity),
            entries: Vec::with_capacity(symbol_capacity),
            storage: String::with_capacity(storage_bytes),
        }
    }

    /// Intern a string, returning its symbol. Equal inputs return equal
    /// symbols for the lifetime of the table.
    pub fn intern(&mut self, s: &str) -> Symbol {
        let hash = self.hash_str(s);
        if let Some(candidates) = self.buckets.get(&hash) {
            for candidate in candidates {
                if self.resolve(*candidate) == s {
                    return *candidate;
                }
            }
        }

        let sym = Symbol::new(self.entries.len() as u32);

        let start = self.storage.len();
        self.storage.push_str(s);
        let end = self.storage.len();

        self.entries.push(Entry { start, end });
        self.buckets.entry(hash).or_default().push(sym);
        sym
    }

    /// Look up the text for a symbol. Unknown symbols resolve to "".
    pub fn resolve(&self, sym: Symbol) -> &str {
        let Some(entry) = self.entries.get(sym.as_u32() as usize) else {
            return "";
        };

        self.storage.get(entry.start..entry.end).unwrap_or("")
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn hash_str(&self, s: &str) -> u64 {
        let mut h = self.hasher.build_hasher();

        s.hash(&mut h);
        h.finish()
    }
}
