//! Syntax node kinds.
//!
//! One closed enumeration covers every node the tree can hold; passes match
//! on it exhaustively. Declarations the refactorings never look at (methods,
//! constructors, events, enums, using directives, ...) are kept as
//! [`NodeKind::Opaque`] token runs, which print back verbatim.
//!
//! Optional children use [`NodeId::INVALID`]; optional tokens use `Option<Token>`.

use std::fmt;

use crate::{NodeId, NodeRange, Span, Token, TokenRange};

/// A node in the arena: kind plus the source span it was parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// `class`, `struct` or `interface`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
}

impl TypeKeyword {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "class" => Some(TypeKeyword::Class),
            "struct" => Some(TypeKeyword::Struct),
            "interface" => Some(TypeKeyword::Interface),
            _ => None,
        }
    }
}

/// Accessor kinds. `init` occupies the setter slot of a property.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "get" => Some(AccessorKind::Get),
            "set" => Some(AccessorKind::Set),
            "init" => Some(AccessorKind::Init),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Init => "init",
        }
    }

    /// `set` and `init` both write the property.
    #[inline]
    pub fn is_setter(self) -> bool {
        matches!(self, AccessorKind::Set | AccessorKind::Init)
    }
}

/// Syntax node kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    // Containers
    /// Root of a file.
    CompilationUnit { members: NodeRange, eof: Token },

    /// `namespace A.B { ... }`, or file-scoped `namespace A.B;` where `open`
    /// is the `;` and `close` is absent.
    Namespace {
        keyword: Token,
        name: TokenRange,
        open: Token,
        members: NodeRange,
        close: Option<Token>,
    },

    /// `class`/`struct`/`interface` declaration. `header` holds everything
    /// between the name and `{` (type parameters, base list, constraints).
    TypeDecl {
        attributes: TokenRange,
        modifiers: TokenRange,
        keyword: Token,
        type_keyword: TypeKeyword,
        name: Token,
        header: TokenRange,
        open: Token,
        members: NodeRange,
        close: Token,
        semi: Option<Token>,
    },

    // Members
    /// `private int _a, _b = 1;`
    Field {
        attributes: TokenRange,
        modifiers: TokenRange,
        ty: TokenRange,
        declarators: NodeRange,
        commas: TokenRange,
        semi: Token,
    },

    /// One variable of a field declaration; `initializer` is an `EqualsValue`.
    Declarator { name: Token, initializer: NodeId },

    /// Property declaration. Exactly one of `accessors` (an `AccessorList`)
    /// and `expr_body` (an `ArrowClause`) is valid. `initializer` (an
    /// `EqualsValue`) only follows an accessor list; `semi` terminates the
    /// expression body or the initializer.
    Property {
        attributes: TokenRange,
        modifiers: TokenRange,
        ty: TokenRange,
        name: Token,
        accessors: NodeId,
        expr_body: NodeId,
        initializer: NodeId,
        semi: Option<Token>,
    },

    /// A stray `;` in a member list. With a missing `;` it is the placeholder
    /// a refactoring leaves behind to carry orphaned comments and directives.
    EmptyMember { semi: Token },

    // Property parts
    /// `{ get; set; }`
    AccessorList {
        open: Token,
        accessors: NodeRange,
        close: Token,
    },

    /// `private set;`, `get { ... }`, `get => x;`. `body` is a `Block`, an
    /// `ArrowClause`, or invalid for a bodiless accessor. `semi` is present for
    /// bodiless and arrow-bodied accessors.
    Accessor {
        attributes: TokenRange,
        modifiers: TokenRange,
        kind: AccessorKind,
        keyword: Token,
        body: NodeId,
        semi: Option<Token>,
    },

    /// `=> expr`
    ArrowClause { arrow: Token, expr: NodeId },

    /// `= expr`
    EqualsValue { equals: Token, value: NodeId },

    // Statements
    Block {
        open: Token,
        stmts: NodeRange,
        close: Token,
    },
    Return {
        keyword: Token,
        expr: NodeId,
        semi: Token,
    },
    ExprStmt { expr: NodeId, semi: Token },
    EmptyStmt { semi: Token },

    // Expressions
    Name(Token),
    This(Token),
    Literal(Token),
    MemberAccess {
        target: NodeId,
        dot: Token,
        name: Token,
    },
    Invocation {
        callee: NodeId,
        open: Token,
        args: NodeRange,
        commas: TokenRange,
        close: Token,
    },
    Unary { op: Token, operand: NodeId },
    Binary {
        left: NodeId,
        op: Token,
        right: NodeId,
    },
    Assign {
        target: NodeId,
        op: Token,
        value: NodeId,
    },
    Paren {
        open: Token,
        inner: NodeId,
        close: Token,
    },

    /// Verbatim token run: an unmodelled member, statement or expression.
    Opaque { tokens: TokenRange },
}

impl NodeKind {
    /// Member list of a container node.
    #[inline]
    pub fn members(&self) -> Option<NodeRange> {
        match self {
            NodeKind::CompilationUnit { members, .. }
            | NodeKind::Namespace { members, .. }
            | NodeKind::TypeDecl { members, .. } => Some(*members),
            _ => None,
        }
    }

    /// The same container with a different member list.
    #[must_use]
    pub fn with_members(self, new_members: NodeRange) -> NodeKind {
        match self {
            NodeKind::CompilationUnit { eof, .. } => NodeKind::CompilationUnit {
                members: new_members,
                eof,
            },
            NodeKind::Namespace {
                keyword,
                name,
                open,
                close,
                ..
            } => NodeKind::Namespace {
                keyword,
                name,
                open,
                members: new_members,
                close,
            },
            NodeKind::TypeDecl {
                attributes,
                modifiers,
                keyword,
                type_keyword,
                name,
                header,
                open,
                close,
                semi,
                ..
            } => NodeKind::TypeDecl {
                attributes,
                modifiers,
                keyword,
                type_keyword,
                name,
                header,
                open,
                members: new_members,
                close,
                semi,
            },
            other => other,
        }
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        self.members().is_some()
    }

    #[inline]
    pub fn is_property(&self) -> bool {
        matches!(self, NodeKind::Property { .. })
    }
}
