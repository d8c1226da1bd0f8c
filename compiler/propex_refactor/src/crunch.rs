//! Crunch: property with a backing field back to an auto-property.
//!
//! ```text
//! private int _age;
//! public int Age { get { return _age; } }
//! ```
//! becomes
//! ```text
//! public int Age { get; private set; }
//! ```
//!
//! Every single-declarator declaration of the backing field is removed
//! (partial declarations of the type included); `private int _x, _y;` is left
//! alone. A removed field that carried comments or directives leaves an
//! empty member with a missing `;` behind, so the trivia survives. A field
//! initializer moves to the property (`{ get; set; } = 5;`) unless the
//! property already has one.

use propex_ir::fold::{fold, FoldCx, MemberEdit, MemberFolder};
use propex_ir::visitor::Visitor;
use propex_ir::{
    AccessorKind, MemberPath, NodeId, NodeKind, SyntaxTree, Token, TokenRange, Trivia, TriviaRange,
};
use rustc_hash::FxHashSet;

use crate::shape::{self, field_first_token, AccessorBody, AccessorView, PropertyBody, PropertyView};
use crate::trivia;
use crate::{FieldSymbol, RefactorError, RefactorOptions};

/// Outcome of [`crunch`].
#[derive(Clone, Debug)]
pub enum Rewrite {
    /// The rewritten tree.
    Applied(SyntaxTree),
    /// No backing field was identified; the input tree stands.
    NotApplicable,
}

impl Rewrite {
    pub fn is_applied(&self) -> bool {
        matches!(self, Rewrite::Applied(_))
    }

    /// The rewritten tree, if any.
    pub fn tree(&self) -> Option<&SyntaxTree> {
        match self {
            Rewrite::Applied(tree) => Some(tree),
            Rewrite::NotApplicable => None,
        }
    }

    /// The rewritten tree, or `original` when nothing was rewritten.
    pub fn unwrap_or(self, original: SyntaxTree) -> SyntaxTree {
        match self {
            Rewrite::Applied(tree) => tree,
            Rewrite::NotApplicable => original,
        }
    }
}

/// Crunch the property at `property_path` onto its backing field.
///
/// `field` is what [`resolve_backing_field`](crate::resolve_backing_field)
/// returned; `None` yields [`Rewrite::NotApplicable`].
pub fn crunch(
    tree: &SyntaxTree,
    field: Option<&FieldSymbol>,
    property_path: &MemberPath,
) -> Result<Rewrite, RefactorError> {
    crunch_with(tree, field, property_path, &RefactorOptions::default())
}

/// [`crunch`] with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(path = %property_path))]
pub fn crunch_with(
    tree: &SyntaxTree,
    field: Option<&FieldSymbol>,
    property_path: &MemberPath,
    options: &RefactorOptions,
) -> Result<Rewrite, RefactorError> {
    let Some(field) = field else {
        tracing::debug!("no backing field, nothing to crunch");
        return Ok(Rewrite::NotApplicable);
    };
    let view = shape::locate(tree, property_path)?;
    if !matches!(view.body, PropertyBody::Accessors(_)) {
        return Err(RefactorError::NotCrunchable {
            path: property_path.clone(),
        });
    }

    let mut finder = FieldFinder {
        symbol: *field,
        found: FxHashSet::default(),
        initializer: None,
    };
    finder.visit_tree(tree);
    tracing::debug!(
        field = tree.name_str(field.name),
        removed = finder.found.len(),
        "crunching property"
    );

    let mut folder = CrunchFolder {
        target: property_path,
        view: &view,
        fields: &finder.found,
        initializer: finder.initializer,
        options,
    };
    Ok(Rewrite::Applied(fold(tree, &mut folder)))
}

/// Paths of the single-declarator declarations of a field.
struct FieldFinder {
    symbol: FieldSymbol,
    found: FxHashSet<MemberPath>,
    /// Initializer (`EqualsValue`) of the first removed declaration that has one.
    initializer: Option<NodeId>,
}

impl Visitor for FieldFinder {
    fn visit_field(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        let NodeKind::Field { declarators, .. } = *tree.kind(id) else {
            return;
        };
        let [declarator] = tree.arena().node_list(declarators) else {
            return;
        };
        let NodeKind::Declarator { name, initializer } = *tree.kind(*declarator) else {
            return;
        };
        if name.text != self.symbol.name
            || tree.declaring_type(path) != Some(self.symbol.declaring_type)
        {
            return;
        }
        self.found.insert(path.clone());
        if self.initializer.is_none() {
            self.initializer = initializer.valid();
        }
    }
}

struct CrunchFolder<'a> {
    target: &'a MemberPath,
    view: &'a PropertyView,
    fields: &'a FxHashSet<MemberPath>,
    initializer: Option<NodeId>,
    options: &'a RefactorOptions,
}

impl MemberFolder for CrunchFolder<'_> {
    fn fold_member(&mut self, cx: &mut FoldCx<'_>, path: &MemberPath, id: NodeId) -> MemberEdit {
        if path == self.target {
            return MemberEdit::Replace(self.build_property(cx));
        }
        if !self.fields.contains(path) {
            return MemberEdit::Keep;
        }
        match placeholder(cx, id) {
            Some(placeholder) => {
                tracing::trace!(%path, "field trivia kept in placeholder");
                MemberEdit::Replace(placeholder)
            }
            None => {
                tracing::trace!(%path, "field removed");
                MemberEdit::Remove
            }
        }
    }
}

impl CrunchFolder<'_> {
    fn build_property(&self, cx: &mut FoldCx<'_>) -> NodeId {
        let view = self.view;
        let Some(list) = view.accessors() else {
            return view.id;
        };
        let arena = cx.arena();
        let span = arena.span(view.id);
        // Layout a synthesized accessor borrows from the one that exists.
        let (indent, separator) = list
            .getter
            .or(list.setter)
            .map(|accessor| {
                (
                    trivia::indentation(arena, accessor.first_token(arena).leading),
                    trivia::separator(arena, accessor.last_token(arena).trailing),
                )
            })
            .unwrap_or_default();
        let existing: Vec<(AccessorView, Token)> = match *arena.kind(list.id) {
            NodeKind::AccessorList { accessors, .. } => arena
                .node_list(accessors)
                .iter()
                .filter_map(|&id| {
                    [list.getter, list.setter]
                        .into_iter()
                        .flatten()
                        .find(|accessor| accessor.id == id)
                })
                .map(|accessor| (accessor, accessor.last_token(arena)))
                .collect(),
            _ => Vec::new(),
        };
        let initializer = match (view.initializer.valid(), self.initializer) {
            (None, Some(moved)) => match *cx.kind(moved) {
                NodeKind::EqualsValue { value, .. } => Some(value),
                _ => None,
            },
            _ => None,
        };

        // Existing accessors keep their order; a missing getter goes first,
        // a missing setter last.
        let mut accessors = Vec::with_capacity(2);
        if list.getter.is_none() {
            accessors.push(self.synthesize(cx, AccessorKind::Get, &indent, &separator));
        }
        for (accessor, last) in existing {
            accessors.push(bodiless(cx, accessor, last));
        }
        if list.setter.is_none() {
            accessors.push(self.synthesize(cx, AccessorKind::Set, &indent, &separator));
        }

        let mut f = cx.factory();
        let accessors = f.list(&accessors);
        let (close, initializer, semi) = match initializer {
            Some(value) => {
                let space = f.space();
                let equals = f.equals().with_trailing(space);
                let init = f.node(NodeKind::EqualsValue { equals, value });
                let semi = f.semicolon().with_trailing(list.close.trailing);
                (list.close.with_trailing(space), init, Some(semi))
            }
            None => (list.close, view.initializer, view.semi),
        };
        let list = f.node(NodeKind::AccessorList {
            open: list.open,
            accessors,
            close,
        });
        f.node_at(
            NodeKind::Property {
                attributes: view.attributes,
                modifiers: view.modifiers,
                ty: view.ty,
                name: view.name,
                accessors: list,
                expr_body: NodeId::INVALID,
                initializer,
                semi,
            },
            span,
        )
    }

    /// `private set;` (or `private get;`) for a slot the property lacks.
    fn synthesize(
        &self,
        cx: &mut FoldCx<'_>,
        kind: AccessorKind,
        leading: &[Trivia],
        trailing: &[Trivia],
    ) -> NodeId {
        let mut f = cx.factory();
        let space = f.space();
        let leading = f.trivia(leading);
        let trailing = f.trivia(trailing);
        let visibility = f
            .keyword(&self.options.visibility)
            .with_leading(leading)
            .with_trailing(space);
        let modifiers = f.tokens(&[visibility]);
        let keyword = f.ident(kind.keyword());
        let semi = f.semicolon().with_trailing(trailing);
        f.node(NodeKind::Accessor {
            attributes: TokenRange::EMPTY,
            modifiers,
            kind,
            keyword,
            body: NodeId::INVALID,
            semi: Some(semi),
        })
    }
}

/// The accessor without its body: `get { return _x; }` becomes `get;`, keeping
/// attributes, modifiers and the trivia after the body.
fn bodiless(cx: &mut FoldCx<'_>, accessor: AccessorView, last: Token) -> NodeId {
    if accessor.body == AccessorBody::Bodiless {
        return accessor.id;
    }
    let mut f = cx.factory();
    let semi = f.semicolon().with_trailing(last.trailing);
    f.node(NodeKind::Accessor {
        attributes: accessor.attributes,
        modifiers: accessor.modifiers,
        kind: accessor.kind,
        keyword: accessor.keyword.with_trailing(TriviaRange::EMPTY),
        body: NodeId::INVALID,
        semi: Some(semi),
    })
}

/// An empty member holding a removed field's comments and directives, or
/// `None` when the field had only layout trivia.
fn placeholder(cx: &mut FoldCx<'_>, field: NodeId) -> Option<NodeId> {
    let arena = cx.arena();
    let NodeKind::Field { semi, .. } = *arena.kind(field) else {
        return None;
    };
    let first = field_first_token(arena, field)?;
    let leading_notes = trivia::has_annotation(arena, first.leading);
    let trailing_notes = trivia::has_annotation(arena, semi.trailing);
    if !leading_notes && !trailing_notes {
        return None;
    }
    let (leading, trailing) = if trailing_notes {
        (
            arena.trivia(first.leading).to_vec(),
            trivia::without_leading_whitespace(arena, semi.trailing),
        )
    } else {
        (trivia::without_indentation(arena, first.leading), Vec::new())
    };

    let mut f = cx.factory();
    let leading = f.trivia(&leading);
    let trailing = f.trivia(&trailing);
    let semi = semi
        .with_leading(leading)
        .with_trailing(trailing)
        .into_missing();
    Some(f.node(NodeKind::EmptyMember { semi }))
}

#[cfg(test)]
mod tests;
