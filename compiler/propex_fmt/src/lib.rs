//! Lossless printer for propex syntax trees.
//!
//! Parsing then printing is the identity on source text. Refactored trees
//! print their synthesized syntax with exactly the trivia the refactoring
//! attached; the printer never re-formats.

mod emitter;
mod printer;

pub use emitter::{Emitter, FileEmitter, StringEmitter};

use printer::Printer;
use propex_ir::{NodeId, SyntaxTree};

/// Print a whole tree to an emitter.
pub fn print<E: Emitter + ?Sized>(tree: &SyntaxTree, out: &mut E) {
    Printer::new(tree, out).node(tree.root());
}

/// Print a whole tree to a string.
pub fn render(tree: &SyntaxTree) -> String {
    render_node(tree, tree.root())
}

/// Print one node (a member, an accessor, an expression) to a string.
pub fn render_node(tree: &SyntaxTree, id: NodeId) -> String {
    let span = tree.arena().span(id);
    let mut out = StringEmitter::with_capacity(span.len() as usize + 16);
    Printer::new(tree, &mut out).node(id);
    out.output()
}
