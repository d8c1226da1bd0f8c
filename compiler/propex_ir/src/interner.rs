//! String interner shared by a tree and every tree rewritten from it.
//!
//! Text is stored once and leaked, so lookups hand out `&'static str` without
//! holding the lock. Rewrites intern the text of the syntax they synthesize
//! (`_age`, `return`, `private`) into the same table, which keeps
//! [`Name`] comparisons valid across the input and output trees.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Interning failed because the table is full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("string interner is full ({count} strings)")]
pub struct InternError {
    pub count: usize,
}

#[derive(Default)]
struct InternTable {
    by_text: FxHashMap<&'static str, Name>,
    texts: Vec<&'static str>,
}

/// Append-only string table behind a read/write lock.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

/// Keywords and layout text nearly every rewrite needs.
const PRELOADED: &[&str] = &[
    " ", "\n", "\r\n", "    ", "{", "}", ";", "=", "=>", ".", "get", "set", "init", "value",
    "return", "private", "public", "protected", "internal", "static", "this", "class", "struct",
    "interface", "namespace",
];

impl StringInterner {
    pub fn new() -> Self {
        let mut table = InternTable::default();
        table.texts.push("");
        table.by_text.insert("", Name::EMPTY);
        let interner = StringInterner {
            table: RwLock::new(table),
        };
        for text in PRELOADED {
            interner.intern(text);
        }
        interner
    }

    /// Intern `text`, failing once `u32` indices run out.
    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().by_text.get(text) {
            return Ok(name);
        }
        let mut table = self.table.write();
        if let Some(&name) = table.by_text.get(text) {
            return Ok(name);
        }
        let count = table.texts.len();
        let index = u32::try_from(count).map_err(|_| InternError { count })?;
        let name = Name::from_index(index);
        let stored: &'static str = Box::leak(text.to_owned().into_boxed_str());
        table.texts.push(stored);
        table.by_text.insert(stored, name);
        Ok(name)
    }

    /// Intern `text`.
    ///
    /// # Panics
    /// When more than `u32::MAX` distinct strings were interned.
    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Text of a name from this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().texts[name.index()]
    }

    /// Number of distinct strings, the empty string included.
    pub fn len(&self) -> usize {
        self.table.read().texts.len()
    }

    /// Whether nothing but the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to interned text.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Reference-counted handle to a [`StringInterner`].
///
/// Every [`SyntaxTree`](crate::SyntaxTree) holds one; trees derived by a
/// rewrite hold a clone of their input's handle.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner::default()
    }

    /// Whether both handles refer to the same table.
    pub fn same_as(&self, other: &SharedInterner) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &StringInterner {
        &self.0
    }
}

impl std::fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedInterner").field(&self.len()).finish()
    }
}
