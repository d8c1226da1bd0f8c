//! Statements of accessor bodies.

use propex_ir::{NodeId, NodeKind, TokenKind};

use super::at_semicolon;
use crate::Parser;

impl Parser<'_> {
    /// `{ stmt* }`
    pub(super) fn parse_block(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let open = self.cursor.eat(TokenKind::OpenBrace)?;
        let mut stmts = Vec::new();
        while !self.cursor.at(TokenKind::CloseBrace) {
            if self.cursor.is_eof() {
                return None;
            }
            stmts.push(self.parse_statement()?);
        }
        let close = self.cursor.bump();
        let stmts = self.arena.alloc_node_list(&stmts);
        Some(self.alloc(NodeKind::Block { open, stmts, close }, start))
    }

    fn parse_statement(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        match self.cursor.kind() {
            TokenKind::OpenBrace => return self.parse_block(),
            TokenKind::Semicolon => {
                let semi = self.cursor.bump();
                return Some(self.alloc(NodeKind::EmptyStmt { semi }, start));
            }
            TokenKind::Keyword if self.cursor.text() == "return" => {
                if let Some(stmt) = self.attempt(Self::parse_return) {
                    return Some(stmt);
                }
            }
            _ => {
                if let Some(stmt) = self.attempt(Self::parse_expr_stmt) {
                    return Some(stmt);
                }
            }
        }
        self.skip_opaque_statement()?;
        let tokens = self.token_run(start);
        Some(self.alloc(NodeKind::Opaque { tokens }, start))
    }

    /// `return;` or `return expr;`
    fn parse_return(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let keyword = self.cursor.bump();
        let expr = if self.cursor.at(TokenKind::Semicolon) {
            NodeId::INVALID
        } else {
            self.parse_expr_or_opaque(at_semicolon)?
        };
        let semi = self.cursor.eat(TokenKind::Semicolon)?;
        Some(self.alloc(NodeKind::Return { keyword, expr, semi }, start))
    }

    /// `expr;` where the expression is fully modelled.
    fn parse_expr_stmt(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let expr = self.parse_expr()?;
        let semi = self.cursor.eat(TokenKind::Semicolon)?;
        Some(self.alloc(NodeKind::ExprStmt { expr, semi }, start))
    }
}

#[cfg(test)]
mod tests {
    use propex_ir::{NodeKind, SharedInterner, SyntaxArena};

    use crate::Parser;

    fn statement_kinds(source: &str) -> Vec<&'static str> {
        let interner = SharedInterner::new();
        let mut arena = SyntaxArena::new();
        let tokens = propex_lexer::lex(source, &mut arena, &interner).unwrap();
        let mut parser = Parser::new(&tokens, arena, &interner);
        let block = parser.parse_block().unwrap();
        assert!(parser.cursor.is_eof());
        let NodeKind::Block { stmts, .. } = *parser.arena.kind(block) else {
            panic!("not a block");
        };
        parser
            .arena
            .node_list(stmts)
            .iter()
            .map(|&id| match parser.arena.kind(id) {
                NodeKind::Return { .. } => "return",
                NodeKind::ExprStmt { .. } => "expr",
                NodeKind::EmptyStmt { .. } => "empty",
                NodeKind::Block { .. } => "block",
                NodeKind::Opaque { .. } => "opaque",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn test_modelled_statements() {
        assert_eq!(
            statement_kinds("{ return _x; _x = value; ; { } return; }"),
            vec!["return", "expr", "empty", "block", "return"]
        );
    }

    #[test]
    fn test_control_flow_is_opaque() {
        assert_eq!(
            statement_kinds("{ if (a) { x(); } else { y(); } return z; }"),
            vec!["opaque", "return"]
        );
        assert_eq!(
            statement_kinds("{ try { a(); } catch (E e) { } finally { } }"),
            vec!["opaque"]
        );
        assert_eq!(
            statement_kinds("{ do { i++; } while (i < 3); var x = new X { A = 1 }; }"),
            vec!["opaque", "opaque"]
        );
    }

    #[test]
    fn test_return_with_opaque_expression() {
        assert_eq!(
            statement_kinds("{ return a ? b : c; }"),
            vec!["return"]
        );
    }

    #[test]
    fn test_unterminated_block_fails() {
        let interner = SharedInterner::new();
        let mut arena = SyntaxArena::new();
        let tokens = propex_lexer::lex("{ return x;", &mut arena, &interner).unwrap();
        let mut parser = Parser::new(&tokens, arena, &interner);
        assert_eq!(parser.parse_block(), None);
    }
}
