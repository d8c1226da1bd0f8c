//! Type syntax.
//!
//! Types are kept as token runs; the refactorings copy them verbatim and
//! never look inside.

use propex_ir::{TokenKind, TokenRange};

use crate::Parser;

/// Keywords that name a predefined type.
pub(super) fn is_predefined_type(word: &str) -> bool {
    matches!(
        word,
        "bool"
            | "byte"
            | "char"
            | "decimal"
            | "double"
            | "float"
            | "int"
            | "long"
            | "object"
            | "sbyte"
            | "short"
            | "string"
            | "uint"
            | "ulong"
            | "ushort"
            | "void"
    )
}

impl Parser<'_> {
    /// `int`, `global::System.Int32`, `List<int>?`, `int[,]`, `(int a, string b)`, `char*`.
    pub(super) fn parse_type(&mut self) -> Option<TokenRange> {
        let start = self.cursor.position();
        self.parse_type_core()?;
        Some(self.token_run(start))
    }

    fn parse_type_core(&mut self) -> Option<()> {
        match self.cursor.kind() {
            TokenKind::OpenParen => self.skip_balanced()?,
            TokenKind::Keyword if is_predefined_type(self.cursor.text()) => {
                self.cursor.bump();
            }
            TokenKind::Ident => {
                self.cursor.bump();
                if self.cursor.eat(TokenKind::ColonColon).is_some() {
                    self.cursor.eat(TokenKind::Ident)?;
                }
            }
            _ => return None,
        }

        loop {
            match self.cursor.kind() {
                TokenKind::Dot => {
                    self.cursor.bump();
                    self.cursor.eat(TokenKind::Ident)?;
                }
                TokenKind::Lt => self.skip_type_arguments()?,
                TokenKind::Question | TokenKind::Star => {
                    self.cursor.bump();
                }
                TokenKind::OpenBracket => {
                    self.cursor.bump();
                    while self.cursor.eat(TokenKind::Comma).is_some() {}
                    self.cursor.eat(TokenKind::CloseBracket)?;
                }
                _ => return Some(()),
            }
        }
    }

    /// `<...>` with nested type arguments. Only type-like tokens may appear.
    fn skip_type_arguments(&mut self) -> Option<()> {
        let mut depth = 0u32;
        loop {
            let tok = self.cursor.bump();
            match tok.kind {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(());
                    }
                }
                TokenKind::Ident
                | TokenKind::Keyword
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::ColonColon
                | TokenKind::Question
                | TokenKind::Star
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket
                | TokenKind::OpenParen
                | TokenKind::CloseParen => {}
                _ => return None,
            }
        }
    }
}
