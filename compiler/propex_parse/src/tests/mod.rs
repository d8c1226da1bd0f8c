//! Parser tests over whole source files.

mod members;
mod properties;

use propex_ir::{MemberPath, NodeId, NodeKind, SharedInterner, SyntaxTree};

use crate::{parse, ParseError};

pub(crate) fn parse_ok(source: &str) -> SyntaxTree {
    parse(source, &SharedInterner::new()).unwrap()
}

pub(crate) fn parse_err(source: &str) -> ParseError {
    parse(source, &SharedInterner::new()).unwrap_err()
}

pub(crate) fn at(tree: &SyntaxTree, steps: &[u32]) -> NodeId {
    tree.resolve(&MemberPath::from_steps(steps))
        .unwrap_or_else(|| panic!("no member at {steps:?}"))
}

/// Short label for a member kind.
pub(crate) fn label(tree: &SyntaxTree, id: NodeId) -> String {
    match *tree.kind(id) {
        NodeKind::Namespace { name, .. } => format!("namespace {}", tree.tokens_text(name)),
        NodeKind::TypeDecl { name, .. } => format!("type {}", tree.text(name)),
        NodeKind::Field { declarators, .. } => {
            let names: Vec<&str> = tree
                .arena()
                .node_list(declarators)
                .iter()
                .map(|&d| match *tree.kind(d) {
                    NodeKind::Declarator { name, .. } => tree.text(name),
                    _ => "?",
                })
                .collect();
            format!("field {}", names.join(","))
        }
        NodeKind::Property { name, .. } => format!("property {}", tree.text(name)),
        NodeKind::EmptyMember { .. } => "empty".to_owned(),
        NodeKind::Opaque { tokens } => {
            let first = tree.arena().tokens(tokens).first().map_or("", |t| tree.text(*t));
            format!("opaque {first}")
        }
        ref other => format!("{other:?}"),
    }
}

pub(crate) fn labels(tree: &SyntaxTree, container: NodeId) -> Vec<String> {
    tree.members(container)
        .iter()
        .map(|&id| label(tree, id))
        .collect()
}
