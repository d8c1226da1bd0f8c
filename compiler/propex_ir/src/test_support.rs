//! Hand-built trees for unit tests (the parser lives downstream).

use crate::{
    AccessorKind, NodeId, NodeKind, SharedInterner, Span, SyntaxArena, SyntaxFactory, SyntaxTree,
    Token, TokenKind, TokenRange, TypeKeyword,
};

/// Builds member declarations without trivia.
pub(crate) struct Builder {
    pub(crate) arena: SyntaxArena,
    pub(crate) interner: SharedInterner,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Builder {
            arena: SyntaxArena::new(),
            interner: SharedInterner::new(),
        }
    }

    fn factory(&mut self) -> SyntaxFactory<'_> {
        SyntaxFactory::new(&mut self.arena, &self.interner)
    }

    fn tok(&self, kind: TokenKind, text: &str) -> Token {
        Token::new(kind, self.interner.intern(text), Span::DUMMY)
    }

    fn run(&mut self, words: &[(TokenKind, &str)]) -> TokenRange {
        let tokens: Vec<Token> = words.iter().map(|&(k, t)| self.tok(k, t)).collect();
        self.arena.alloc_tokens(&tokens)
    }

    pub(crate) fn field(&mut self, ty: &str, name: &str) -> NodeId {
        let ty = self.run(&[(TokenKind::Keyword, ty)]);
        let name = self.tok(TokenKind::Ident, name);
        let declarator = self.factory().node(NodeKind::Declarator {
            name,
            initializer: NodeId::INVALID,
        });
        let declarators = self.arena.alloc_node_list(&[declarator]);
        let semi = self.tok(TokenKind::Semicolon, ";");
        self.factory().node(NodeKind::Field {
            attributes: TokenRange::EMPTY,
            modifiers: TokenRange::EMPTY,
            ty,
            declarators,
            commas: TokenRange::EMPTY,
            semi,
        })
    }

    /// `ty name { get; set; }`
    pub(crate) fn auto_property(&mut self, ty: &str, name: &str) -> NodeId {
        let mut accessors = Vec::new();
        for kind in [AccessorKind::Get, AccessorKind::Set] {
            let keyword = self.tok(TokenKind::Ident, kind.keyword());
            let semi = self.tok(TokenKind::Semicolon, ";");
            accessors.push(self.factory().node(NodeKind::Accessor {
                attributes: TokenRange::EMPTY,
                modifiers: TokenRange::EMPTY,
                kind,
                keyword,
                body: NodeId::INVALID,
                semi: Some(semi),
            }));
        }
        let accessors = self.arena.alloc_node_list(&accessors);
        let open = self.tok(TokenKind::OpenBrace, "{");
        let close = self.tok(TokenKind::CloseBrace, "}");
        let list = self.factory().node(NodeKind::AccessorList {
            open,
            accessors,
            close,
        });
        let ty = self.run(&[(TokenKind::Keyword, ty)]);
        let name = self.tok(TokenKind::Ident, name);
        self.factory().node(NodeKind::Property {
            attributes: TokenRange::EMPTY,
            modifiers: TokenRange::EMPTY,
            ty,
            name,
            accessors: list,
            expr_body: NodeId::INVALID,
            initializer: NodeId::INVALID,
            semi: None,
        })
    }

    /// `class name header { members }`
    pub(crate) fn class(&mut self, name: &str, header: &[(TokenKind, &str)], members: &[NodeId]) -> NodeId {
        let keyword = self.tok(TokenKind::Keyword, "class");
        let name = self.tok(TokenKind::Ident, name);
        let header = self.run(header);
        let members = self.arena.alloc_node_list(members);
        let open = self.tok(TokenKind::OpenBrace, "{");
        let close = self.tok(TokenKind::CloseBrace, "}");
        self.factory().node(NodeKind::TypeDecl {
            attributes: TokenRange::EMPTY,
            modifiers: TokenRange::EMPTY,
            keyword,
            type_keyword: TypeKeyword::Class,
            name,
            header,
            open,
            members,
            close,
            semi: None,
        })
    }

    /// `namespace a.b { members }`
    pub(crate) fn namespace(&mut self, dotted: &str, members: &[NodeId]) -> NodeId {
        let keyword = self.tok(TokenKind::Keyword, "namespace");
        let mut words = Vec::new();
        for (i, part) in dotted.split('.').enumerate() {
            if i > 0 {
                words.push((TokenKind::Dot, "."));
            }
            words.push((TokenKind::Ident, part));
        }
        let name = self.run(&words);
        let members = self.arena.alloc_node_list(members);
        let open = self.tok(TokenKind::OpenBrace, "{");
        let close = self.tok(TokenKind::CloseBrace, "}");
        self.factory().node(NodeKind::Namespace {
            keyword,
            name,
            open,
            members,
            close: Some(close),
        })
    }

    pub(crate) fn finish(mut self, members: &[NodeId]) -> SyntaxTree {
        let members = self.arena.alloc_node_list(members);
        let eof = self.tok(TokenKind::Eof, "");
        let root = self.factory().node(NodeKind::CompilationUnit { members, eof });
        SyntaxTree::new(self.arena, root, self.interner)
    }
}

/// ```text
/// namespace Shop.Orders {              // [0]
///     class Order : Base<int>, IFoo {  // [0, 0]
///         int _total;                  // [0, 0, 0]
///         int Total { get; set; }      // [0, 0, 1]
///         class Line {                 // [0, 0, 2]
///             int Qty { get; set; }    // [0, 0, 2, 0]
///         }
///     }
/// }
/// class Base { }                       // [1]
/// ```
pub(crate) fn sample_tree() -> SyntaxTree {
    let mut b = Builder::new();
    let total_field = b.field("int", "_total");
    let total = b.auto_property("int", "Total");
    let qty = b.auto_property("int", "Qty");
    let line = b.class("Line", &[], &[qty]);
    let order = b.class(
        "Order",
        &[
            (TokenKind::Colon, ":"),
            (TokenKind::Ident, "Base"),
            (TokenKind::Lt, "<"),
            (TokenKind::Keyword, "int"),
            (TokenKind::Gt, ">"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "IFoo"),
        ],
        &[total_field, total, line],
    );
    let ns = b.namespace("Shop.Orders", &[order]);
    let base = b.class("Base", &[], &[]);
    b.finish(&[ns, base])
}
