//! Token-by-token printing.
//!
//! Every token prints as leading trivia, text, trailing trivia. Missing
//! tokens print their trivia only. Nothing is inserted or normalized, so a
//! parsed tree prints back to its source byte for byte.

use propex_ir::{NodeId, NodeKind, NodeRange, SyntaxTree, Token, TokenRange, TriviaRange};

use crate::Emitter;

pub(crate) struct Printer<'t, E: Emitter + ?Sized> {
    tree: &'t SyntaxTree,
    out: &'t mut E,
}

impl<'t, E: Emitter + ?Sized> Printer<'t, E> {
    pub(crate) fn new(tree: &'t SyntaxTree, out: &'t mut E) -> Self {
        Printer { tree, out }
    }

    pub(crate) fn node(&mut self, id: NodeId) {
        let Some(id) = id.valid() else {
            return;
        };
        let tree = self.tree;
        match *tree.kind(id) {
            NodeKind::CompilationUnit { members, eof } => {
                self.nodes(members);
                self.token(eof);
            }
            NodeKind::Namespace {
                keyword,
                name,
                open,
                members,
                close,
            } => {
                self.token(keyword);
                self.tokens(name);
                self.token(open);
                self.nodes(members);
                self.opt_token(close);
            }
            NodeKind::TypeDecl {
                attributes,
                modifiers,
                keyword,
                name,
                header,
                open,
                members,
                close,
                semi,
                ..
            } => {
                self.tokens(attributes);
                self.tokens(modifiers);
                self.token(keyword);
                self.token(name);
                self.tokens(header);
                self.token(open);
                self.nodes(members);
                self.token(close);
                self.opt_token(semi);
            }
            NodeKind::Field {
                attributes,
                modifiers,
                ty,
                declarators,
                commas,
                semi,
            } => {
                self.tokens(attributes);
                self.tokens(modifiers);
                self.tokens(ty);
                self.separated(declarators, commas);
                self.token(semi);
            }
            NodeKind::Declarator { name, initializer } => {
                self.token(name);
                self.node(initializer);
            }
            NodeKind::Property {
                attributes,
                modifiers,
                ty,
                name,
                accessors,
                expr_body,
                initializer,
                semi,
            } => {
                self.tokens(attributes);
                self.tokens(modifiers);
                self.tokens(ty);
                self.token(name);
                self.node(accessors);
                self.node(expr_body);
                self.node(initializer);
                self.opt_token(semi);
            }
            NodeKind::EmptyMember { semi }
            | NodeKind::EmptyStmt { semi } => self.token(semi),
            NodeKind::AccessorList {
                open,
                accessors,
                close,
            } => {
                self.token(open);
                self.nodes(accessors);
                self.token(close);
            }
            NodeKind::Accessor {
                attributes,
                modifiers,
                keyword,
                body,
                semi,
                ..
            } => {
                self.tokens(attributes);
                self.tokens(modifiers);
                self.token(keyword);
                self.node(body);
                self.opt_token(semi);
            }
            NodeKind::ArrowClause { arrow, expr } => {
                self.token(arrow);
                self.node(expr);
            }
            NodeKind::EqualsValue { equals, value } => {
                self.token(equals);
                self.node(value);
            }
            NodeKind::Block { open, stmts, close } => {
                self.token(open);
                self.nodes(stmts);
                self.token(close);
            }
            NodeKind::Return {
                keyword,
                expr,
                semi,
            } => {
                self.token(keyword);
                self.node(expr);
                self.token(semi);
            }
            NodeKind::ExprStmt { expr, semi } => {
                self.node(expr);
                self.token(semi);
            }
            NodeKind::Name(tok) | NodeKind::This(tok) | NodeKind::Literal(tok) => self.token(tok),
            NodeKind::MemberAccess { target, dot, name } => {
                self.node(target);
                self.token(dot);
                self.token(name);
            }
            NodeKind::Invocation {
                callee,
                open,
                args,
                commas,
                close,
            } => {
                self.node(callee);
                self.token(open);
                self.separated(args, commas);
                self.token(close);
            }
            NodeKind::Unary { op, operand } => {
                self.token(op);
                self.node(operand);
            }
            NodeKind::Binary { left, op, right }
            | NodeKind::Assign {
                target: left,
                op,
                value: right,
            } => {
                self.node(left);
                self.token(op);
                self.node(right);
            }
            NodeKind::Paren { open, inner, close } => {
                self.token(open);
                self.node(inner);
                self.token(close);
            }
            NodeKind::Opaque { tokens } => self.tokens(tokens),
        }
    }

    fn nodes(&mut self, range: NodeRange) {
        let tree = self.tree;
        for &id in tree.arena().node_list(range) {
            self.node(id);
        }
    }

    /// Items interleaved with their separators: `a , b , c`.
    fn separated(&mut self, items: NodeRange, separators: TokenRange) {
        let tree = self.tree;
        let arena = tree.arena();
        let separators = arena.tokens(separators);
        for (i, &item) in arena.node_list(items).iter().enumerate() {
            if i > 0 {
                if let Some(&sep) = separators.get(i - 1) {
                    self.token(sep);
                }
            }
            self.node(item);
        }
    }

    fn tokens(&mut self, range: TokenRange) {
        let tree = self.tree;
        for &tok in tree.arena().tokens(range) {
            self.token(tok);
        }
    }

    fn opt_token(&mut self, token: Option<Token>) {
        if let Some(tok) = token {
            self.token(tok);
        }
    }

    fn token(&mut self, token: Token) {
        self.trivia(token.leading);
        if !token.missing {
            self.out.emit(self.tree.text(token));
        }
        self.trivia(token.trailing);
    }

    fn trivia(&mut self, range: TriviaRange) {
        let tree = self.tree;
        for piece in tree.arena().trivia(range) {
            self.out.emit(tree.name_str(piece.text));
        }
    }
}
