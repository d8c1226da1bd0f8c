use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::*;
use crate::test_support::sample_tree;

struct KeepAll;

impl MemberFolder for KeepAll {
    fn fold_member(&mut self, _cx: &mut FoldCx<'_>, _path: &MemberPath, _id: NodeId) -> MemberEdit {
        MemberEdit::Keep
    }
}

/// Applies one edit at one path.
struct EditAt {
    path: MemberPath,
    edit: MemberEdit,
    seen: Vec<MemberPath>,
}

impl MemberFolder for EditAt {
    fn fold_member(&mut self, _cx: &mut FoldCx<'_>, path: &MemberPath, _id: NodeId) -> MemberEdit {
        self.seen.push(path.clone());
        if *path == self.path {
            self.edit.clone()
        } else {
            MemberEdit::Keep
        }
    }
}

fn edit_at(steps: &[u32], edit: MemberEdit) -> EditAt {
    EditAt {
        path: MemberPath::from_steps(steps),
        edit,
        seen: Vec::new(),
    }
}

#[test]
fn test_keep_all_returns_same_root() {
    let tree = sample_tree();
    let folded = fold(&tree, &mut KeepAll);
    assert_eq!(folded.root(), tree.root());
    assert_eq!(folded.arena().len(), tree.arena().len());
}

#[test]
fn test_remove_rebuilds_only_the_spine() {
    let tree = sample_tree();
    let mut folder = edit_at(&[0, 0, 0], MemberEdit::Remove);
    let folded = fold(&tree, &mut folder);

    // The input is untouched.
    assert_eq!(tree.members(tree.resolve(&MemberPath::from_steps(&[0, 0])).unwrap()).len(), 3);

    let order = folded.resolve(&MemberPath::from_steps(&[0, 0])).unwrap();
    assert_eq!(folded.members(order).len(), 2);
    assert_ne!(folded.root(), tree.root());

    // Untouched members and subtrees keep their ids.
    let old_total = tree.resolve(&MemberPath::from_steps(&[0, 0, 1])).unwrap();
    let old_line = tree.resolve(&MemberPath::from_steps(&[0, 0, 2])).unwrap();
    let old_base = tree.resolve(&MemberPath::from_steps(&[1])).unwrap();
    assert_eq!(folded.members(order), &[old_total, old_line]);
    assert_eq!(folded.resolve(&MemberPath::from_steps(&[1])), Some(old_base));
}

#[test]
fn test_splice_and_paths_refer_to_input() {
    let tree = sample_tree();
    let field = tree.resolve(&MemberPath::from_steps(&[0, 0, 0])).unwrap();
    let mut folder = edit_at(&[0, 0, 1], MemberEdit::Splice(smallvec![field, field]));
    let folded = fold(&tree, &mut folder);

    let order = folded.resolve(&MemberPath::from_steps(&[0, 0])).unwrap();
    assert_eq!(folded.members(order).len(), 4);

    // Nested members after the splice were visited under their input paths.
    assert!(folder.seen.contains(&MemberPath::from_steps(&[0, 0, 2, 0])));
    assert!(!folder.seen.contains(&MemberPath::from_steps(&[0, 0, 3])));
}

#[test]
fn test_replaced_container_is_not_descended() {
    let tree = sample_tree();
    let base = tree.resolve(&MemberPath::from_steps(&[1])).unwrap();
    let mut folder = edit_at(&[0, 0, 2], MemberEdit::Replace(base));
    let folded = fold(&tree, &mut folder);

    assert!(!folder.seen.contains(&MemberPath::from_steps(&[0, 0, 2, 0])));
    assert_eq!(
        folded.resolve(&MemberPath::from_steps(&[0, 0, 2])),
        Some(base)
    );
}
