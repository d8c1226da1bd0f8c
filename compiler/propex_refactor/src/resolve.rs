//! Finding the field a getter returns.

use propex_ir::{MemberPath, Name, NodeId, NodeKind, SyntaxTree, TypeKey};

use crate::shape::{self, AccessorBody};

/// Identity of a field: the type that declares it and its name.
///
/// A lookup key only. Crunch compares it against field declarations; it
/// never points at a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldSymbol {
    pub declaring_type: TypeKey,
    pub name: Name,
}

/// Binds a name expression to the field it refers to.
///
/// `scope` is the path of the member the expression appears in. `expr` is a
/// `Name` or `this.name` node of `tree`.
pub trait FieldResolver {
    fn resolve_referenced_field(
        &self,
        tree: &SyntaxTree,
        scope: &MemberPath,
        expr: NodeId,
    ) -> Option<FieldSymbol>;
}

impl<F> FieldResolver for F
where
    F: Fn(&SyntaxTree, &MemberPath, NodeId) -> Option<FieldSymbol>,
{
    fn resolve_referenced_field(
        &self,
        tree: &SyntaxTree,
        scope: &MemberPath,
        expr: NodeId,
    ) -> Option<FieldSymbol> {
        self(tree, scope, expr)
    }
}

/// The field a getter body returns, if the body is exactly `return name;`
/// (or `return this.name;`) and `name` is a field of `declaring_type`
/// itself. Inherited and outer-type fields do not count.
pub fn resolve_getter(
    tree: &SyntaxTree,
    getter_body: NodeId,
    declaring_type: TypeKey,
    scope: &MemberPath,
    resolver: &dyn FieldResolver,
) -> Option<FieldSymbol> {
    let NodeKind::Block { stmts, .. } = *tree.kind(getter_body) else {
        return None;
    };
    let [stmt] = tree.arena().node_list(stmts) else {
        return None;
    };
    let NodeKind::Return { expr, .. } = *tree.kind(*stmt) else {
        return None;
    };
    let expr = expr.valid()?;
    shape::bare_field_reference(tree.arena(), expr)?;
    let symbol = resolver.resolve_referenced_field(tree, scope, expr)?;
    (symbol.declaring_type == declaring_type).then_some(symbol)
}

/// The backing field of the property at `property_path`: the field its
/// getter returns. `None` when the path is not a property with a statement
/// getter, or the getter does anything but return one of the type's fields.
#[tracing::instrument(level = "debug", skip_all, fields(path = %property_path))]
pub fn resolve_backing_field(
    tree: &SyntaxTree,
    property_path: &MemberPath,
    resolver: &dyn FieldResolver,
) -> Option<FieldSymbol> {
    let view = shape::locate(tree, property_path).ok()?;
    let getter = view.accessors()?.getter?;
    let AccessorBody::Block(body) = getter.body else {
        return None;
    };
    let declaring_type = tree.declaring_type(property_path)?;
    let symbol = resolve_getter(tree, body, declaring_type, property_path, resolver);
    match symbol {
        Some(symbol) => tracing::debug!(field = tree.name_str(symbol.name), "backing field"),
        None => tracing::debug!("no backing field"),
    }
    symbol
}
