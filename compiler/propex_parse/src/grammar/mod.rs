//! Grammar productions, split by syntactic category.
//!
//! Member-level productions return `Result`: a malformed container is an
//! error. Productions below a member (types, accessors, statements,
//! expressions) are speculative and return `Option`; when one fails, the
//! enclosing member or statement is re-read as an opaque token run.

mod accessor;
mod expr;
mod member;
mod stmt;
mod ty;

use propex_ir::{TokenKind, TokenRange};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Attribute sections `[A] [B(1)]` before a declaration.
    fn parse_attributes(&mut self) -> Option<TokenRange> {
        let start = self.cursor.position();
        while self.cursor.at(TokenKind::OpenBracket) {
            self.skip_balanced()?;
        }
        Some(self.token_run(start))
    }

    /// Consume a delimited group starting at the current opening delimiter.
    fn skip_balanced(&mut self) -> Option<()> {
        let mut depth = 0u32;
        loop {
            let tok = self.cursor.current();
            if tok.kind == TokenKind::Eof {
                return None;
            }
            self.cursor.bump();
            if tok.kind.is_open_delim() {
                depth += 1;
            } else if tok.kind.is_close_delim() {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(());
                }
            }
        }
    }

    /// Consume an unmodelled member.
    ///
    /// A member ends at `;` at nesting depth 0, or at a `}` that returns to
    /// depth 0 (`void M() { }`, `enum E { A }`). Members with `=` or `=>` at
    /// depth 0 always run to their `;` (`int[] a = { 1 };`, `int M() => 1;`).
    fn skip_opaque_member(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.position();
        let mut depth = 0u32;
        let mut until_semicolon = false;
        loop {
            let tok = self.cursor.current();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::CloseBrace if depth == 0 => break,
                TokenKind::CloseParen | TokenKind::CloseBracket if depth == 0 => {
                    return Err(ParseError::UnbalancedDelimiter {
                        delim: self.cursor.text_of(tok).to_owned(),
                        span: tok.span,
                    });
                }
                _ => {}
            }
            self.cursor.bump();
            match tok.kind {
                kind if kind.is_open_delim() => depth += 1,
                kind if kind.is_close_delim() => {
                    depth -= 1;
                    if depth == 0 && kind == TokenKind::CloseBrace && !until_semicolon {
                        break;
                    }
                }
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::Eq | TokenKind::FatArrow if depth == 0 => until_semicolon = true,
                _ => {}
            }
        }
        if self.cursor.position() == start {
            return Err(self.cursor.error("a declaration"));
        }
        trace!(
            start,
            end = self.cursor.position(),
            "member kept as opaque tokens"
        );
        Ok(())
    }

    /// Consume an unmodelled statement. Like a member, except that a block
    /// followed by `else`, `catch` or `finally` (or `while` after `do`)
    /// continues the statement.
    fn skip_opaque_statement(&mut self) -> Option<()> {
        let start = self.cursor.position();
        let starts_with_do = self.cursor.at_keyword("do");
        let mut depth = 0u32;
        let mut until_semicolon = false;
        loop {
            let tok = self.cursor.current();
            match tok.kind {
                TokenKind::Eof => return None,
                kind if kind.is_close_delim() && depth == 0 => break,
                _ => {}
            }
            self.cursor.bump();
            match tok.kind {
                kind if kind.is_open_delim() => depth += 1,
                kind if kind.is_close_delim() => {
                    depth -= 1;
                    if depth == 0 && kind == TokenKind::CloseBrace && !until_semicolon {
                        let continues = ["else", "catch", "finally"]
                            .iter()
                            .any(|word| self.cursor.at_keyword(word))
                            || (starts_with_do && self.cursor.at_keyword("while"));
                        if !continues {
                            break;
                        }
                    }
                }
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::Eq | TokenKind::FatArrow if depth == 0 => until_semicolon = true,
                _ => {}
            }
        }
        (self.cursor.position() > start).then_some(())
    }

    /// Consume an unmodelled expression up to (not including) a terminator
    /// at depth 0.
    fn skip_opaque_expr(&mut self, terminator: fn(&Self) -> bool) -> Option<()> {
        let start = self.cursor.position();
        let mut depth = 0u32;
        loop {
            let kind = self.cursor.kind();
            if kind == TokenKind::Eof {
                return None;
            }
            if depth == 0 && (terminator(self) || kind.is_close_delim()) {
                break;
            }
            self.cursor.bump();
            if kind.is_open_delim() {
                depth += 1;
            } else if kind.is_close_delim() {
                depth -= 1;
            }
        }
        (self.cursor.position() > start).then_some(())
    }
}

/// Terminator for expressions ending at `;`.
fn at_semicolon(p: &Parser<'_>) -> bool {
    p.cursor.at(TokenKind::Semicolon)
}
