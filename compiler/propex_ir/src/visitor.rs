//! Member Visitor
//!
//! Read-only traversal of the declaration structure of a [`SyntaxTree`].
//! Every visited member comes with its [`MemberPath`], so a visitor can
//! report locations that the refactorings accept directly.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific members.
//!
//! # Example
//!
//! ```text
//! struct CountFields(usize);
//!
//! impl Visitor for CountFields {
//!     fn visit_field(&mut self, _tree: &SyntaxTree, _path: &MemberPath, _id: NodeId) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use crate::{MemberPath, NodeId, NodeKind, SyntaxTree};

/// Declaration visitor.
///
/// The visitor can mutate its own state during traversal; the tree remains
/// immutable.
pub trait Visitor {
    /// Visit the whole tree, starting at the compilation unit.
    fn visit_tree(&mut self, tree: &SyntaxTree) {
        walk_members(self, tree, &MemberPath::root(), tree.root());
    }

    /// Visit any member. Dispatches on the node kind.
    fn visit_member(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        walk_member(self, tree, path, id);
    }

    fn visit_namespace(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        walk_members(self, tree, path, id);
    }

    fn visit_type_decl(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        walk_members(self, tree, path, id);
    }

    fn visit_field(&mut self, _tree: &SyntaxTree, _path: &MemberPath, _id: NodeId) {}

    /// Visit a property. The default walks its accessors.
    fn visit_property(&mut self, tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
        walk_property(self, tree, path, id);
    }

    /// Visit one accessor of the property at `path`.
    fn visit_accessor(&mut self, _tree: &SyntaxTree, _path: &MemberPath, _id: NodeId) {}

    /// Visit an empty member, an opaque member, or anything else.
    fn visit_other_member(&mut self, _tree: &SyntaxTree, _path: &MemberPath, _id: NodeId) {}
}

/// Dispatch a member to the matching `visit_*` method.
pub fn walk_member<V: Visitor + ?Sized>(
    visitor: &mut V,
    tree: &SyntaxTree,
    path: &MemberPath,
    id: NodeId,
) {
    match tree.kind(id) {
        NodeKind::Namespace { .. } => visitor.visit_namespace(tree, path, id),
        NodeKind::TypeDecl { .. } => visitor.visit_type_decl(tree, path, id),
        NodeKind::Field { .. } => visitor.visit_field(tree, path, id),
        NodeKind::Property { .. } => visitor.visit_property(tree, path, id),
        _ => visitor.visit_other_member(tree, path, id),
    }
}

/// Visit every member of a container in order.
pub fn walk_members<V: Visitor + ?Sized>(
    visitor: &mut V,
    tree: &SyntaxTree,
    path: &MemberPath,
    container: NodeId,
) {
    for (index, &member) in (0u32..).zip(tree.members(container)) {
        visitor.visit_member(tree, &path.child(index), member);
    }
}

/// Visit the accessors of a property.
pub fn walk_property<V: Visitor + ?Sized>(
    visitor: &mut V,
    tree: &SyntaxTree,
    path: &MemberPath,
    property: NodeId,
) {
    let NodeKind::Property { accessors, .. } = *tree.kind(property) else {
        return;
    };
    let Some(list) = accessors.valid() else {
        return;
    };
    if let NodeKind::AccessorList { accessors, .. } = *tree.kind(list) {
        for &accessor in tree.arena().node_list(accessors) {
            visitor.visit_accessor(tree, path, accessor);
        }
    }
}
