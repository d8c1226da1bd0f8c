//! Structured views of property declarations.
//!
//! The arena stores a property as a flat `NodeKind::Property` with optional
//! children; the rewrites want to ask "is there a getter, and what is its
//! body?". [`PropertyView`] answers that once, so the classifier, resolver
//! and both rewrites agree on what a property looks like.

use propex_ir::{
    AccessorKind, MemberPath, ModifierFlags, NodeId, NodeKind, StringInterner, SyntaxArena,
    SyntaxTree, Token, TokenKind, TokenRange,
};

use crate::RefactorError;

#[derive(Clone, Debug)]
pub(crate) struct PropertyView {
    pub(crate) id: NodeId,
    pub(crate) attributes: TokenRange,
    pub(crate) modifiers: TokenRange,
    pub(crate) ty: TokenRange,
    pub(crate) name: Token,
    pub(crate) body: PropertyBody,
    pub(crate) initializer: NodeId,
    pub(crate) semi: Option<Token>,
}

#[derive(Clone, Debug)]
pub(crate) enum PropertyBody {
    Accessors(AccessorListView),
    /// `=> expr;`
    Arrow { expr: NodeId },
}

#[derive(Clone, Debug)]
pub(crate) struct AccessorListView {
    pub(crate) id: NodeId,
    pub(crate) open: Token,
    pub(crate) close: Token,
    pub(crate) getter: Option<AccessorView>,
    /// `set` or `init`.
    pub(crate) setter: Option<AccessorView>,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct AccessorView {
    pub(crate) id: NodeId,
    pub(crate) attributes: TokenRange,
    pub(crate) modifiers: TokenRange,
    pub(crate) kind: AccessorKind,
    pub(crate) keyword: Token,
    pub(crate) body: AccessorBody,
    pub(crate) semi: Option<Token>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum AccessorBody {
    /// `get;`
    Bodiless,
    /// `get { ... }`
    Block(NodeId),
    /// `get => ...;`, the id of the expression.
    Arrow(NodeId),
}

impl PropertyView {
    /// View a property node; `None` for any other node or a malformed property.
    pub(crate) fn read(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        let NodeKind::Property {
            attributes,
            modifiers,
            ty,
            name,
            accessors,
            expr_body,
            initializer,
            semi,
        } = *arena.kind(id)
        else {
            return None;
        };
        let body = if let Some(list) = accessors.valid() {
            PropertyBody::Accessors(AccessorListView::read(arena, list)?)
        } else {
            let NodeKind::ArrowClause { expr, .. } = *arena.kind(expr_body.valid()?) else {
                return None;
            };
            PropertyBody::Arrow { expr }
        };
        Some(PropertyView {
            id,
            attributes,
            modifiers,
            ty,
            name,
            body,
            initializer,
            semi,
        })
    }

    pub(crate) fn accessors(&self) -> Option<&AccessorListView> {
        match &self.body {
            PropertyBody::Accessors(list) => Some(list),
            PropertyBody::Arrow { .. } => None,
        }
    }

    pub(crate) fn is_static(&self, arena: &SyntaxArena, interner: &StringInterner) -> bool {
        ModifierFlags::from_tokens(arena.tokens(self.modifiers), interner)
            .contains(ModifierFlags::STATIC)
    }

    pub(crate) fn first_token(&self, arena: &SyntaxArena) -> Token {
        [self.attributes, self.modifiers, self.ty]
            .into_iter()
            .find_map(|range| arena.tokens(range).first().copied())
            .unwrap_or(self.name)
    }

    pub(crate) fn last_token(&self) -> Token {
        match (&self.body, self.semi) {
            (_, Some(semi)) => semi,
            (PropertyBody::Accessors(list), None) => list.close,
            // An expression body always ends in `;`; fall back to the name.
            (PropertyBody::Arrow { .. }, None) => self.name,
        }
    }
}

impl AccessorListView {
    fn read(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        let NodeKind::AccessorList {
            open,
            accessors,
            close,
        } = *arena.kind(id)
        else {
            return None;
        };
        let mut getter = None;
        let mut setter = None;
        for &accessor in arena.node_list(accessors) {
            let view = AccessorView::read(arena, accessor)?;
            if view.kind.is_setter() {
                setter = Some(view);
            } else {
                getter = Some(view);
            }
        }
        Some(AccessorListView {
            id,
            open,
            close,
            getter,
            setter,
        })
    }
}

impl AccessorView {
    fn read(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        let NodeKind::Accessor {
            attributes,
            modifiers,
            kind,
            keyword,
            body,
            semi,
        } = *arena.kind(id)
        else {
            return None;
        };
        let body = match body.valid() {
            None => AccessorBody::Bodiless,
            Some(body) => match *arena.kind(body) {
                NodeKind::Block { .. } => AccessorBody::Block(body),
                NodeKind::ArrowClause { expr, .. } => AccessorBody::Arrow(expr),
                _ => return None,
            },
        };
        Some(AccessorView {
            id,
            attributes,
            modifiers,
            kind,
            keyword,
            body,
            semi,
        })
    }

    pub(crate) fn first_token(&self, arena: &SyntaxArena) -> Token {
        [self.attributes, self.modifiers]
            .into_iter()
            .find_map(|range| arena.tokens(range).first().copied())
            .unwrap_or(self.keyword)
    }

    pub(crate) fn last_token(&self, arena: &SyntaxArena) -> Token {
        if let Some(semi) = self.semi {
            return semi;
        }
        match self.body {
            AccessorBody::Block(block) => match *arena.kind(block) {
                NodeKind::Block { close, .. } => close,
                _ => self.keyword,
            },
            AccessorBody::Bodiless | AccessorBody::Arrow(_) => self.keyword,
        }
    }
}

/// The property addressed by `path`.
pub(crate) fn locate(tree: &SyntaxTree, path: &MemberPath) -> Result<PropertyView, RefactorError> {
    let id = tree.resolve(path).ok_or_else(|| RefactorError::PathNotFound {
        path: path.clone(),
    })?;
    PropertyView::read(tree.arena(), id).ok_or_else(|| RefactorError::NotAProperty {
        path: path.clone(),
    })
}

/// First token of a field declaration.
pub(crate) fn field_first_token(arena: &SyntaxArena, field: NodeId) -> Option<Token> {
    let NodeKind::Field {
        attributes,
        modifiers,
        ty,
        ..
    } = *arena.kind(field)
    else {
        return None;
    };
    [attributes, modifiers, ty]
        .into_iter()
        .find_map(|range| arena.tokens(range).first().copied())
}

/// The field name an expression refers to when it is *bare*: a simple name
/// or `this.name`. Parentheses, calls and longer member chains are not bare.
pub(crate) fn bare_field_reference(arena: &SyntaxArena, expr: NodeId) -> Option<Token> {
    match *arena.kind(expr) {
        NodeKind::Name(name) if name.is(TokenKind::Ident) => Some(name),
        NodeKind::MemberAccess { target, name, .. } => {
            matches!(arena.kind(target), NodeKind::This(_)).then_some(name)
        }
        _ => None,
    }
}
