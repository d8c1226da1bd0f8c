//! Declaration modifier sets.
//!
//! The tree keeps modifiers as the original tokens (so trivia and order
//! survive); `ModifierFlags` is the set view computed from them.

use bitflags::bitflags;

use crate::{StringLookup, Token};

bitflags! {
    /// Modifier keywords present on a declaration or accessor.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ModifierFlags: u32 {
        // === Accessibility (bits 0-7) ===
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const FILE = 1 << 4;

        // === Storage and inheritance (bits 8-23) ===
        const STATIC = 1 << 8;
        const READONLY = 1 << 9;
        const CONST = 1 << 10;
        const VOLATILE = 1 << 11;
        const VIRTUAL = 1 << 12;
        const OVERRIDE = 1 << 13;
        const ABSTRACT = 1 << 14;
        const SEALED = 1 << 15;
        const NEW = 1 << 16;
        const EXTERN = 1 << 17;
        const UNSAFE = 1 << 18;
        const PARTIAL = 1 << 19;
        const REQUIRED = 1 << 20;
        const ASYNC = 1 << 21;

        // === Masks ===
        const ACCESSIBILITY = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::INTERNAL.bits()
            | Self::FILE.bits();
    }
}

impl ModifierFlags {
    /// Flag for a single modifier keyword, `None` for anything else.
    pub fn from_keyword(text: &str) -> Option<Self> {
        let flag = match text {
            "public" => Self::PUBLIC,
            "private" => Self::PRIVATE,
            "protected" => Self::PROTECTED,
            "internal" => Self::INTERNAL,
            "file" => Self::FILE,
            "static" => Self::STATIC,
            "readonly" => Self::READONLY,
            "const" => Self::CONST,
            "volatile" => Self::VOLATILE,
            "virtual" => Self::VIRTUAL,
            "override" => Self::OVERRIDE,
            "abstract" => Self::ABSTRACT,
            "sealed" => Self::SEALED,
            "new" => Self::NEW,
            "extern" => Self::EXTERN,
            "unsafe" => Self::UNSAFE,
            "partial" => Self::PARTIAL,
            "required" => Self::REQUIRED,
            "async" => Self::ASYNC,
            _ => return None,
        };
        Some(flag)
    }

    /// Collect the flags of a modifier token run. Unknown tokens are ignored.
    pub fn from_tokens<I: StringLookup + ?Sized>(tokens: &[Token], interner: &I) -> Self {
        tokens
            .iter()
            .filter_map(|tok| Self::from_keyword(interner.lookup(tok.text)))
            .fold(Self::empty(), |acc, flag| acc | flag)
    }

    /// Accessibility part of the set.
    #[inline]
    pub fn accessibility(self) -> Self {
        self & Self::ACCESSIBILITY
    }
}
