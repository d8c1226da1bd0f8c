//! Compilation units, namespaces, type declarations and members.

use propex_ir::{ModifierFlags, NodeId, NodeKind, TokenKind, TokenRange, TypeKeyword};
use tracing::debug;

use super::at_semicolon;
use crate::{ParseError, Parser};

/// Where a member list ends.
#[derive(Copy, Clone, PartialEq, Eq)]
enum MemberListEnd {
    /// At end of file (compilation unit, file-scoped namespace).
    Eof,
    /// At the container's `}`.
    CloseBrace,
}

impl Parser<'_> {
    pub(crate) fn parse_compilation_unit(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.position();
        let members = self.parse_member_list(MemberListEnd::Eof)?;
        let eof = self.cursor.current();
        let span = self.cursor.span_since(start).merge(eof.span);
        Ok(self
            .arena
            .alloc(NodeKind::CompilationUnit { members, eof }, span))
    }

    fn parse_member_list(&mut self, end: MemberListEnd) -> Result<propex_ir::NodeRange, ParseError> {
        let mut members = Vec::new();
        loop {
            match self.cursor.kind() {
                TokenKind::Eof => break,
                TokenKind::CloseBrace if end == MemberListEnd::CloseBrace => break,
                TokenKind::CloseBrace => {
                    let tok = self.cursor.current();
                    return Err(ParseError::UnbalancedDelimiter {
                        delim: "}".to_owned(),
                        span: tok.span,
                    });
                }
                _ => members.push(self.parse_member()?),
            }
        }
        Ok(self.arena.alloc_node_list(&members))
    }

    fn parse_member(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.position();

        if self.cursor.at_keyword("namespace") {
            return self.parse_namespace();
        }
        // `[assembly: X]` stands alone.
        if self.cursor.at(TokenKind::OpenBracket)
            && self.cursor.peek(1).kind == TokenKind::Ident
            && self.cursor.peek(2).kind == TokenKind::Colon
        {
            if self.skip_balanced().is_none() {
                return Err(self.cursor.error("`]`"));
            }
            return Ok(self.opaque_member(start));
        }
        if self.cursor.at(TokenKind::Semicolon) {
            let semi = self.cursor.bump();
            return Ok(self.alloc(NodeKind::EmptyMember { semi }, start));
        }

        let Some(attributes) = self.parse_attributes() else {
            return Err(self.cursor.error("`]`"));
        };
        let modifiers_start = self.cursor.position();
        while self.at_modifier() {
            self.cursor.bump();
        }
        let modifiers = self.token_run(modifiers_start);

        if self.cursor.at(TokenKind::Keyword) {
            if let Some(type_keyword) = TypeKeyword::from_text(self.cursor.text()) {
                return self.parse_type_decl(start, attributes, modifiers, type_keyword);
            }
        }

        let member = self.attempt(|p| p.parse_field_or_property(start, attributes, modifiers));
        if let Some(member) = member {
            return Ok(member);
        }
        self.cursor.set_position(start);
        self.skip_opaque_member()?;
        Ok(self.opaque_member(start))
    }

    fn opaque_member(&mut self, start: usize) -> NodeId {
        let tokens = self.token_run(start);
        self.alloc(NodeKind::Opaque { tokens }, start)
    }

    /// Modifier keyword, or a contextual modifier (`partial`, `required`,
    /// `file`, `async`) followed by another word.
    fn at_modifier(&self) -> bool {
        if ModifierFlags::from_keyword(self.cursor.text()).is_none() {
            return false;
        }
        match self.cursor.kind() {
            TokenKind::Keyword => true,
            TokenKind::Ident => matches!(
                self.cursor.peek(1).kind,
                TokenKind::Ident | TokenKind::Keyword
            ),
            _ => false,
        }
    }

    /// `namespace A.B { ... }` or `namespace A.B;`
    fn parse_namespace(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.position();
        let keyword = self.cursor.bump();

        let name_start = self.cursor.position();
        self.cursor.expect(TokenKind::Ident, "a namespace name")?;
        while self.cursor.eat(TokenKind::Dot).is_some() {
            self.cursor.expect(TokenKind::Ident, "a namespace name")?;
        }
        let name = self.token_run(name_start);

        let (open, members, close) = if self.cursor.at(TokenKind::Semicolon) {
            let open = self.cursor.bump();
            (open, self.parse_member_list(MemberListEnd::Eof)?, None)
        } else {
            let open = self.cursor.expect(TokenKind::OpenBrace, "`{` or `;`")?;
            let members = self.parse_member_list(MemberListEnd::CloseBrace)?;
            let close = self.cursor.expect(TokenKind::CloseBrace, "`}`")?;
            (open, members, Some(close))
        };

        Ok(self.alloc(
            NodeKind::Namespace {
                keyword,
                name,
                open,
                members,
                close,
            },
            start,
        ))
    }

    /// `class Name<T> : Base where T : new() { ... }`
    fn parse_type_decl(
        &mut self,
        start: usize,
        attributes: TokenRange,
        modifiers: TokenRange,
        type_keyword: TypeKeyword,
    ) -> Result<NodeId, ParseError> {
        let keyword = self.cursor.bump();
        let name = self.cursor.expect(TokenKind::Ident, "a type name")?;

        let header_start = self.cursor.position();
        let mut depth = 0u32;
        loop {
            let tok = self.cursor.current();
            match tok.kind {
                TokenKind::OpenBrace if depth == 0 => break,
                TokenKind::Eof | TokenKind::Semicolon | TokenKind::CloseBrace => {
                    return Err(self.cursor.error("`{`"));
                }
                TokenKind::OpenParen | TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseParen | TokenKind::CloseBracket => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        ParseError::UnbalancedDelimiter {
                            delim: self.cursor.text_of(tok).to_owned(),
                            span: tok.span,
                        }
                    })?;
                }
                _ => {}
            }
            self.cursor.bump();
        }
        let header = self.token_run(header_start);

        let open = self.cursor.bump();
        let members = self.parse_member_list(MemberListEnd::CloseBrace)?;
        let close = self.cursor.expect(TokenKind::CloseBrace, "`}`")?;
        let semi = self.cursor.eat(TokenKind::Semicolon);

        debug!(type_name = self.cursor.text_of(name), ?type_keyword, "type declaration");
        Ok(self.alloc(
            NodeKind::TypeDecl {
                attributes,
                modifiers,
                keyword,
                type_keyword,
                name,
                header,
                open,
                members,
                close,
                semi,
            },
            start,
        ))
    }

    /// Field or property after its attributes and modifiers.
    fn parse_field_or_property(
        &mut self,
        start: usize,
        attributes: TokenRange,
        modifiers: TokenRange,
    ) -> Option<NodeId> {
        let ty = self.parse_type()?;
        if !self.cursor.at(TokenKind::Ident) {
            return None;
        }
        match self.cursor.peek(1).kind {
            TokenKind::OpenBrace | TokenKind::FatArrow => {
                self.parse_property(start, attributes, modifiers, ty)
            }
            TokenKind::Semicolon | TokenKind::Eq | TokenKind::Comma => {
                self.parse_field(start, attributes, modifiers, ty)
            }
            _ => None,
        }
    }

    fn parse_property(
        &mut self,
        start: usize,
        attributes: TokenRange,
        modifiers: TokenRange,
        ty: TokenRange,
    ) -> Option<NodeId> {
        let name = self.cursor.bump();
        let mut accessors = NodeId::INVALID;
        let mut expr_body = NodeId::INVALID;
        let mut initializer = NodeId::INVALID;
        let mut semi = None;

        if self.cursor.at(TokenKind::FatArrow) {
            let arrow_start = self.cursor.position();
            let arrow = self.cursor.bump();
            let expr = self.parse_expr_or_opaque(at_semicolon)?;
            expr_body = self.alloc(NodeKind::ArrowClause { arrow, expr }, arrow_start);
            semi = Some(self.cursor.eat(TokenKind::Semicolon)?);
        } else {
            accessors = self.parse_accessor_list()?;
            if self.cursor.at(TokenKind::Eq) {
                let init_start = self.cursor.position();
                let equals = self.cursor.bump();
                let value = self.parse_expr_or_opaque(at_semicolon)?;
                initializer = self.alloc(NodeKind::EqualsValue { equals, value }, init_start);
                semi = Some(self.cursor.eat(TokenKind::Semicolon)?);
            }
        }

        Some(self.alloc(
            NodeKind::Property {
                attributes,
                modifiers,
                ty,
                name,
                accessors,
                expr_body,
                initializer,
                semi,
            },
            start,
        ))
    }

    /// `T a;`, `T a = 1, b;`
    fn parse_field(
        &mut self,
        start: usize,
        attributes: TokenRange,
        modifiers: TokenRange,
        ty: TokenRange,
    ) -> Option<NodeId> {
        let mut declarators = Vec::new();
        let mut commas = Vec::new();
        loop {
            let decl_start = self.cursor.position();
            let name = self.cursor.eat(TokenKind::Ident)?;
            let initializer = if self.cursor.at(TokenKind::Eq) {
                let init_start = self.cursor.position();
                let equals = self.cursor.bump();
                let value = self.parse_expr_or_opaque(at_declarator_end)?;
                self.alloc(NodeKind::EqualsValue { equals, value }, init_start)
            } else {
                NodeId::INVALID
            };
            declarators.push(self.alloc(NodeKind::Declarator { name, initializer }, decl_start));
            match self.cursor.eat(TokenKind::Comma) {
                Some(comma) => commas.push(comma),
                None => break,
            }
        }
        let semi = self.cursor.eat(TokenKind::Semicolon)?;
        let declarators = self.arena.alloc_node_list(&declarators);
        let commas = self.arena.alloc_tokens(&commas);
        Some(self.alloc(
            NodeKind::Field {
                attributes,
                modifiers,
                ty,
                declarators,
                commas,
                semi,
            },
            start,
        ))
    }
}

/// End of a field declarator's initializer: `;`, or a `,` that starts the
/// next declarator (`, name =`, `, name,`, `, name;`). Commas inside
/// unmodelled initializers such as `new Dictionary<int, string>()` do not
/// qualify.
fn at_declarator_end(p: &Parser<'_>) -> bool {
    match p.cursor.kind() {
        TokenKind::Semicolon => true,
        TokenKind::Comma => {
            p.cursor.peek(1).kind == TokenKind::Ident
                && matches!(
                    p.cursor.peek(2).kind,
                    TokenKind::Eq | TokenKind::Comma | TokenKind::Semicolon
                )
        }
        _ => false,
    }
}
