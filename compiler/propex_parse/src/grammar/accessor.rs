//! Property accessor lists.

use propex_ir::{AccessorKind, ModifierFlags, NodeId, NodeKind, TokenKind};

use super::at_semicolon;
use crate::Parser;

impl Parser<'_> {
    /// `{ get; private set; }`, `{ get { return _x; } init => _x = value; }`.
    ///
    /// Fails on event accessors (`add`/`remove`), on a repeated accessor and
    /// on `set` together with `init`; such properties stay opaque.
    pub(super) fn parse_accessor_list(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let open = self.cursor.eat(TokenKind::OpenBrace)?;
        let mut accessors = Vec::new();
        let mut has_getter = false;
        let mut has_setter = false;
        while !self.cursor.at(TokenKind::CloseBrace) {
            let (accessor, kind) = self.parse_accessor()?;
            let seen = if kind.is_setter() {
                &mut has_setter
            } else {
                &mut has_getter
            };
            if *seen {
                return None;
            }
            *seen = true;
            accessors.push(accessor);
        }
        let close = self.cursor.bump();
        let accessors = self.arena.alloc_node_list(&accessors);
        Some(self.alloc(
            NodeKind::AccessorList {
                open,
                accessors,
                close,
            },
            start,
        ))
    }

    fn parse_accessor(&mut self) -> Option<(NodeId, AccessorKind)> {
        let start = self.cursor.position();
        let attributes = self.parse_attributes()?;

        let modifiers_start = self.cursor.position();
        while self.cursor.at(TokenKind::Keyword)
            && ModifierFlags::from_keyword(self.cursor.text()).is_some()
        {
            self.cursor.bump();
        }
        let modifiers = self.token_run(modifiers_start);

        if !self.cursor.at(TokenKind::Ident) {
            return None;
        }
        let kind = AccessorKind::from_text(self.cursor.text())?;
        let keyword = self.cursor.bump();

        let (body, semi) = match self.cursor.kind() {
            TokenKind::Semicolon => (NodeId::INVALID, Some(self.cursor.bump())),
            TokenKind::OpenBrace => (self.parse_block()?, None),
            TokenKind::FatArrow => {
                let arrow_start = self.cursor.position();
                let arrow = self.cursor.bump();
                let expr = self.parse_expr_or_opaque(at_semicolon)?;
                let clause = self.alloc(NodeKind::ArrowClause { arrow, expr }, arrow_start);
                (clause, Some(self.cursor.eat(TokenKind::Semicolon)?))
            }
            _ => return None,
        };

        let accessor = self.alloc(
            NodeKind::Accessor {
                attributes,
                modifiers,
                kind,
                keyword,
                body,
                semi,
            },
            start,
        );
        Some((accessor, kind))
    }
}
