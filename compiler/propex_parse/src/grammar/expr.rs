//! Expression parsing.
//!
//! Covers names, `this`, literals, member access, invocation, unary, binary
//! and assignment operators, and parentheses. Anything else (lambdas, `new`,
//! `?:`, casts, indexers, `switch` expressions, ...) makes the attempt fail
//! and the caller keeps the expression as opaque tokens.

use propex_ir::{NodeId, NodeKind, TokenKind};

use super::ty::is_predefined_type;
use crate::Parser;

/// Binding power of binary operators; higher binds tighter.
fn binary_precedence(kind: TokenKind) -> Option<u8> {
    let prec = match kind {
        TokenKind::QuestionQuestion => 1,
        TokenKind::PipePipe => 2,
        TokenKind::AmpAmp => 3,
        TokenKind::Pipe => 4,
        TokenKind::Caret => 5,
        TokenKind::Amp => 6,
        TokenKind::EqEq | TokenKind::NotEq => 7,
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => 8,
        TokenKind::Plus | TokenKind::Minus => 9,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 10,
        _ => return None,
    };
    Some(prec)
}

impl Parser<'_> {
    /// An expression that must end at `terminator`; kept as an opaque token
    /// run when it is not fully modelled.
    pub(super) fn parse_expr_or_opaque(&mut self, terminator: fn(&Self) -> bool) -> Option<NodeId> {
        let start = self.cursor.position();
        let modelled = self.attempt(|p| {
            let expr = p.parse_expr()?;
            terminator(p).then_some(expr)
        });
        if modelled.is_some() {
            return modelled;
        }
        self.skip_opaque_expr(terminator)?;
        let tokens = self.token_run(start);
        Some(self.alloc(NodeKind::Opaque { tokens }, start))
    }

    pub(super) fn parse_expr(&mut self) -> Option<NodeId> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let target = self.parse_binary(0)?;
        if matches!(self.cursor.kind(), TokenKind::Eq | TokenKind::CompoundAssign) {
            let op = self.cursor.bump();
            let value = self.parse_assignment()?;
            return Some(self.alloc(NodeKind::Assign { target, op, value }, start));
        }
        Some(target)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Option<NodeId> {
        let start = self.cursor.position();
        let mut left = self.parse_unary()?;
        while let Some(prec) = binary_precedence(self.cursor.kind()) {
            if prec < min_prec {
                break;
            }
            let op = self.cursor.bump();
            // `??` is right-associative.
            let next = if op.kind == TokenKind::QuestionQuestion {
                prec
            } else {
                prec + 1
            };
            let right = self.parse_binary(next)?;
            left = self.alloc(NodeKind::Binary { left, op, right }, start);
        }
        Some(left)
    }

    fn parse_unary(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        match self.cursor.kind() {
            TokenKind::Bang
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Tilde
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus => {
                let op = self.cursor.bump();
                let operand = self.parse_unary()?;
                Some(self.alloc(NodeKind::Unary { op, operand }, start))
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let mut expr = self.parse_primary()?;
        loop {
            match self.cursor.kind() {
                TokenKind::Dot => {
                    let dot = self.cursor.bump();
                    let name = self.cursor.eat(TokenKind::Ident)?;
                    expr = self.alloc(
                        NodeKind::MemberAccess {
                            target: expr,
                            dot,
                            name,
                        },
                        start,
                    );
                }
                TokenKind::OpenParen => {
                    let open = self.cursor.bump();
                    let mut args = Vec::new();
                    let mut commas = Vec::new();
                    if !self.cursor.at(TokenKind::CloseParen) {
                        loop {
                            args.push(self.parse_expr()?);
                            match self.cursor.eat(TokenKind::Comma) {
                                Some(comma) => commas.push(comma),
                                None => break,
                            }
                        }
                    }
                    let close = self.cursor.eat(TokenKind::CloseParen)?;
                    let args = self.arena.alloc_node_list(&args);
                    let commas = self.arena.alloc_tokens(&commas);
                    expr = self.alloc(
                        NodeKind::Invocation {
                            callee: expr,
                            open,
                            args,
                            commas,
                            close,
                        },
                        start,
                    );
                }
                _ => return Some(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Option<NodeId> {
        let start = self.cursor.position();
        let tok = self.cursor.current();
        let kind = match tok.kind {
            TokenKind::Ident => NodeKind::Name(tok),
            TokenKind::Number | TokenKind::Str | TokenKind::Char => NodeKind::Literal(tok),
            TokenKind::Keyword => match self.cursor.text() {
                "this" => NodeKind::This(tok),
                "true" | "false" | "null" | "default" => NodeKind::Literal(tok),
                word if word == "base" || is_predefined_type(word) => NodeKind::Name(tok),
                _ => return None,
            },
            TokenKind::OpenParen => {
                let open = self.cursor.bump();
                let inner = self.parse_expr()?;
                let close = self.cursor.eat(TokenKind::CloseParen)?;
                return Some(self.alloc(NodeKind::Paren { open, inner, close }, start));
            }
            _ => return None,
        };
        self.cursor.bump();
        Some(self.alloc(kind, start))
    }
}
