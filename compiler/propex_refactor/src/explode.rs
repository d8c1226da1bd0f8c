//! Explode: auto-property to property with an explicit backing field.
//!
//! ```text
//! public string Name { get; set; }
//! ```
//! becomes
//! ```text
//! private string _name;
//! public string Name { get { return _name; } set { _name = value; } }
//! ```
//!
//! The field is inserted right before the property and takes over its
//! indentation and line break, plus any directive lines above it, so the
//! field lands in the same `#region`. The property keeps its attributes,
//! modifiers, type, name and the comments above it; each accessor keeps its
//! attributes and modifiers. An initializer (`{ get; set; } = 5;`) or an expression body
//! (`=> _cache;`) becomes the field's initializer.

use propex_ir::fold::{fold, FoldCx, MemberEdit, MemberFolder};
use propex_ir::{
    AccessorKind, MemberPath, NodeId, NodeKind, SyntaxFactory, SyntaxTree, Token, TokenRange,
    TriviaRange,
};
use smallvec::smallvec;

use crate::classify::classify_view;
use crate::shape::{self, AccessorView, PropertyBody, PropertyView};
use crate::trivia;
use crate::{Candidate, RefactorError, RefactorOptions};

/// Result of [`explode`].
#[derive(Clone, Debug)]
pub struct Exploded {
    pub tree: SyntaxTree,
    /// Path of the inserted field (the property's old position).
    pub field_path: MemberPath,
    /// Path of the rewritten property.
    pub property_path: MemberPath,
}

/// Explode the property at `property_path`, declared in the type at
/// `parent_path`, with the default naming and visibility.
pub fn explode(
    tree: &SyntaxTree,
    parent_path: &MemberPath,
    property_path: &MemberPath,
) -> Result<Exploded, RefactorError> {
    explode_with(tree, parent_path, property_path, &RefactorOptions::default())
}

/// [`explode`] with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(path = %property_path))]
pub fn explode_with(
    tree: &SyntaxTree,
    parent_path: &MemberPath,
    property_path: &MemberPath,
    options: &RefactorOptions,
) -> Result<Exploded, RefactorError> {
    let view = shape::locate(tree, property_path)?;
    let (Some(parent), Some(index)) = (property_path.parent(), property_path.last()) else {
        return Err(RefactorError::NotAProperty {
            path: property_path.clone(),
        });
    };
    if &parent != parent_path {
        return Err(RefactorError::ParentMismatch {
            parent: parent_path.clone(),
            property: property_path.clone(),
        });
    }
    if classify_view(tree, &view) != Candidate::Explode {
        return Err(RefactorError::NotExplodable {
            path: property_path.clone(),
        });
    }

    let field_name = options.field_name(tree.text(view.name));
    tracing::debug!(field = %field_name, "exploding property");
    let mut folder = ExplodeFolder {
        target: property_path,
        view: &view,
        field_name: &field_name,
        options,
    };
    let tree = fold(tree, &mut folder);

    Ok(Exploded {
        tree,
        field_path: property_path.clone(),
        property_path: property_path.sibling(index + 1),
    })
}

struct ExplodeFolder<'a> {
    target: &'a MemberPath,
    view: &'a PropertyView,
    field_name: &'a str,
    options: &'a RefactorOptions,
}

impl MemberFolder for ExplodeFolder<'_> {
    fn fold_member(&mut self, cx: &mut FoldCx<'_>, path: &MemberPath, _id: NodeId) -> MemberEdit {
        if path != self.target {
            return MemberEdit::Keep;
        }
        let field = self.build_field(cx);
        let property = self.build_property(cx);
        tracing::trace!(?field, ?property, "spliced field and property");
        MemberEdit::Splice(smallvec![field, property])
    }
}

impl ExplodeFolder<'_> {
    /// `private T _name = init;` on the property's line.
    fn build_field(&self, cx: &mut FoldCx<'_>) -> NodeId {
        let view = self.view;
        let arena = cx.arena();
        let first = view.first_token(arena);
        let detached = trivia::detached_len(arena, first.leading);
        let mut leading = arena.trivia(first.leading)[..detached].to_vec();
        leading.extend(trivia::indentation(arena, first.leading));
        let line_break = trivia::line_break(arena, view.last_token().trailing);
        let mut ty = arena.tokens(view.ty).to_vec();
        let is_static = view.is_static(arena, cx.interner());
        let value = match view.body {
            PropertyBody::Arrow { expr, .. } => Some(expr),
            PropertyBody::Accessors(_) => view.initializer.valid().and_then(|init| {
                match *cx.kind(init) {
                    NodeKind::EqualsValue { value, .. } => Some(value),
                    _ => None,
                }
            }),
        };

        let mut f = cx.factory();
        let space = f.space();
        let leading = f.trivia(&leading);
        let mut modifiers = vec![f
            .keyword(&self.options.visibility)
            .with_leading(leading)
            .with_trailing(space)];
        if is_static {
            modifiers.push(f.keyword("static").with_trailing(space));
        }
        if let Some(first) = ty.first_mut() {
            *first = first.with_leading(TriviaRange::EMPTY);
        }
        if let Some(last) = ty.last_mut() {
            *last = last.with_trailing(space);
        }

        let mut name = f.ident(self.field_name);
        let initializer = match value {
            Some(value) => {
                name = name.with_trailing(space);
                let equals = f.equals().with_trailing(space);
                f.node(NodeKind::EqualsValue { equals, value })
            }
            None => NodeId::INVALID,
        };
        let declarator = f.node(NodeKind::Declarator { name, initializer });
        let semi_trailing = match line_break {
            Some(piece) => f.trivia(&[piece]),
            None => space,
        };
        let semi = f.semicolon().with_trailing(semi_trailing);

        let modifiers = f.tokens(&modifiers);
        let ty = f.tokens(&ty);
        let declarators = f.list(&[declarator]);
        f.node(NodeKind::Field {
            attributes: TokenRange::EMPTY,
            modifiers,
            ty,
            declarators,
            commas: TokenRange::EMPTY,
            semi,
        })
    }

    /// The property with accessor bodies reading and writing the field.
    fn build_property(&self, cx: &mut FoldCx<'_>) -> NodeId {
        let view = self.view;
        let span = cx.arena().span(view.id);
        let (attributes, modifiers, ty, name) = self.reattach(cx);
        let list = match &view.body {
            PropertyBody::Accessors(list) => {
                let arena = cx.arena();
                let mut sources: Vec<(AccessorView, Token)> = Vec::with_capacity(2);
                if let NodeKind::AccessorList { accessors, .. } = *arena.kind(list.id) {
                    for &accessor in arena.node_list(accessors) {
                        let original = [list.getter, list.setter]
                            .into_iter()
                            .flatten()
                            .find(|candidate| candidate.id == accessor);
                        if let Some(original) = original {
                            sources.push((original, original.last_token(arena)));
                        }
                    }
                }
                // An initializer moves to the field; its `;` ends the list.
                let close = match (view.initializer.valid(), view.semi) {
                    (Some(_), Some(semi)) => list.close.with_trailing(semi.trailing),
                    _ => list.close,
                };

                let mut f = cx.factory();
                let accessors: Vec<NodeId> = sources
                    .into_iter()
                    .map(|(original, last)| {
                        let body = accessor_body(&mut f, original.kind, self.field_name, last.trailing);
                        let space = f.space();
                        f.node(NodeKind::Accessor {
                            attributes: original.attributes,
                            modifiers: original.modifiers,
                            kind: original.kind,
                            keyword: original.keyword.with_trailing(space),
                            body,
                            semi: None,
                        })
                    })
                    .collect();
                let accessors = f.list(&accessors);
                f.node(NodeKind::AccessorList {
                    open: list.open,
                    accessors,
                    close,
                })
            }
            PropertyBody::Arrow { .. } => {
                let semi_trailing = view.last_token().trailing;
                let mut f = cx.factory();
                let space = f.space();
                let body = accessor_body(&mut f, AccessorKind::Get, self.field_name, space);
                let keyword = f.ident(AccessorKind::Get.keyword()).with_trailing(space);
                let getter = f.node(NodeKind::Accessor {
                    attributes: TokenRange::EMPTY,
                    modifiers: TokenRange::EMPTY,
                    kind: AccessorKind::Get,
                    keyword,
                    body,
                    semi: None,
                });
                let accessors = f.list(&[getter]);
                let open = f.open_brace().with_trailing(space);
                let close = f.close_brace().with_trailing(semi_trailing);
                f.node(NodeKind::AccessorList {
                    open,
                    accessors,
                    close,
                })
            }
        };

        cx.factory().node_at(
            NodeKind::Property {
                attributes,
                modifiers,
                ty,
                name,
                accessors: list,
                expr_body: NodeId::INVALID,
                initializer: NodeId::INVALID,
                semi: None,
            },
            span,
        )
    }

    /// The property's leading token runs without the trivia the field took
    /// over (directive lines above the property).
    fn reattach(&self, cx: &mut FoldCx<'_>) -> (TokenRange, TokenRange, TokenRange, Token) {
        let view = self.view;
        let mut name = view.name;
        let mut runs = [view.attributes, view.modifiers, view.ty];
        let first = view.first_token(cx.arena());
        let detached = trivia::detached_len(cx.arena(), first.leading);
        if detached > 0 {
            let attached = cx.arena().trivia(first.leading)[detached..].to_vec();
            let mut f = cx.factory();
            let leading = f.trivia(&attached);
            match runs.iter().position(|run| !run.is_empty()) {
                Some(i) => {
                    let mut tokens = f.tokens_of(runs[i]);
                    tokens[0] = tokens[0].with_leading(leading);
                    runs[i] = f.tokens(&tokens);
                }
                None => name = name.with_leading(leading),
            }
        }
        let [attributes, modifiers, ty] = runs;
        (attributes, modifiers, ty, name)
    }
}

/// `{ return _f; }` for a getter, `{ _f = value; }` for a setter or init.
/// The closing brace gets `trailing`.
fn accessor_body(
    f: &mut SyntaxFactory<'_>,
    kind: AccessorKind,
    field: &str,
    trailing: TriviaRange,
) -> NodeId {
    let space = f.space();
    let stmt = if kind.is_setter() {
        let target = f.ident(field).with_trailing(space);
        let target = f.node(NodeKind::Name(target));
        let op = f.equals().with_trailing(space);
        let value = f.name_expr("value");
        let expr = f.node(NodeKind::Assign { target, op, value });
        let semi = f.semicolon().with_trailing(space);
        f.node(NodeKind::ExprStmt { expr, semi })
    } else {
        let keyword = f.keyword("return").with_trailing(space);
        let expr = f.name_expr(field);
        let semi = f.semicolon().with_trailing(space);
        f.node(NodeKind::Return {
            keyword,
            expr,
            semi,
        })
    };
    let open = f.open_brace().with_trailing(space);
    let close = f.close_brace().with_trailing(trailing);
    let stmts = f.list(&[stmt]);
    f.node(NodeKind::Block { open, stmts, close })
}
