//! Copy-on-write member rewriting.
//!
//! [`fold`] walks the member structure of a tree and asks a [`MemberFolder`]
//! what to do with each member. The result is a new tree:
//!
//! - members the folder keeps are reused by id, never copied
//! - a container is re-created only when something below it changed, so
//!   siblings and unrelated subtrees keep their ids in the output
//! - the input tree is never modified; its arena is cloned and extended
//!
//! Paths handed to the folder are those of the *input* tree, so a folder can
//! compare them against paths captured before the rewrite.

use smallvec::SmallVec;

use crate::{
    MemberPath, NodeId, NodeKind, StringInterner, SyntaxArena, SyntaxFactory, SyntaxTree, Token,
};

/// What to do with one member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MemberEdit {
    /// Keep the member. Containers are descended into.
    Keep,
    /// Put another node in its place.
    Replace(NodeId),
    /// Drop the member.
    Remove,
    /// Put a run of nodes in its place.
    Splice(SmallVec<[NodeId; 2]>),
}

/// Access to the output arena while folding.
pub struct FoldCx<'a> {
    arena: &'a mut SyntaxArena,
    interner: &'a StringInterner,
}

impl<'a> FoldCx<'a> {
    #[inline]
    pub fn arena(&self) -> &SyntaxArena {
        self.arena
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena.kind(id)
    }

    #[inline]
    pub fn text(&self, token: Token) -> &str {
        self.interner.lookup(token.text)
    }

    /// Factory for allocating replacement syntax.
    pub fn factory(&mut self) -> SyntaxFactory<'_> {
        SyntaxFactory::new(&mut *self.arena, self.interner)
    }
}

/// Decides the fate of each member during a [`fold`].
pub trait MemberFolder {
    fn fold_member(&mut self, cx: &mut FoldCx<'_>, path: &MemberPath, id: NodeId) -> MemberEdit;
}

/// Rewrite a tree. When the folder keeps everything the result has the same
/// root id as the input.
pub fn fold<F: MemberFolder + ?Sized>(tree: &SyntaxTree, folder: &mut F) -> SyntaxTree {
    let mut arena = tree.arena().clone();
    let interner = tree.shared_interner().clone();
    let root = {
        let mut cx = FoldCx {
            arena: &mut arena,
            interner: &interner,
        };
        fold_container(&mut cx, folder, &MemberPath::root(), tree.root())
    };
    SyntaxTree::new(arena, root, interner)
}

fn fold_container<F: MemberFolder + ?Sized>(
    cx: &mut FoldCx<'_>,
    folder: &mut F,
    path: &MemberPath,
    container: NodeId,
) -> NodeId {
    let kind = *cx.kind(container);
    let Some(range) = kind.members() else {
        return container;
    };
    let members = cx.arena.node_list(range).to_vec();
    let mut folded = Vec::with_capacity(members.len());
    let mut changed = false;

    for (index, member) in (0u32..).zip(members) {
        let member_path = path.child(index);
        match folder.fold_member(cx, &member_path, member) {
            MemberEdit::Keep => {
                let kept = if cx.kind(member).is_container() {
                    fold_container(cx, folder, &member_path, member)
                } else {
                    member
                };
                changed |= kept != member;
                folded.push(kept);
            }
            MemberEdit::Replace(replacement) => {
                changed = true;
                folded.push(replacement);
            }
            MemberEdit::Remove => changed = true,
            MemberEdit::Splice(run) => {
                changed = true;
                folded.extend(run);
            }
        }
    }

    if !changed {
        return container;
    }
    let members = cx.arena.alloc_node_list(&folded);
    let span = cx.arena.span(container);
    cx.arena.alloc(kind.with_members(members), span)
}

#[cfg(test)]
mod tests;
