//! Syntax trees and member paths.
//!
//! A [`SyntaxTree`] is an arena plus a root id. Trees are values: rewriting
//! one produces another tree whose arena extends a copy of the original's,
//! so every node id of the input that the rewrite did not replace still
//! addresses the same node in the output.
//!
//! Members are addressed by [`MemberPath`], the list of member indices from
//! the compilation unit down through namespaces and type declarations. A host
//! captures the path when it selects a property and hands it to the
//! refactorings; nothing is located by comparing node contents.

use std::fmt;

use smallvec::SmallVec;

use crate::visitor::Visitor;
use crate::{
    Name, NodeId, NodeKind, SharedInterner, StringInterner, SyntaxArena, Token, TokenKind,
    TokenRange,
};

/// Path from the compilation unit to a member.
///
/// `[]` is the compilation unit itself, `[1]` its second member, `[1, 0]` the
/// first member of that, and so on.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct MemberPath(SmallVec<[u32; 4]>);

impl MemberPath {
    /// The path of the compilation unit.
    pub fn root() -> Self {
        MemberPath(SmallVec::new())
    }

    pub fn from_steps(steps: &[u32]) -> Self {
        MemberPath(SmallVec::from_slice(steps))
    }

    /// Path of the `index`-th member of the node at this path.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        MemberPath(steps)
    }

    /// Path of the enclosing container, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(MemberPath(SmallVec::from_slice(init)))
    }

    /// Same parent, different last index.
    #[must_use]
    pub fn sibling(&self, index: u32) -> Self {
        let mut steps = self.0.clone();
        if let Some(last) = steps.last_mut() {
            *last = index;
        }
        MemberPath(steps)
    }

    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.0.last().copied()
    }

    #[inline]
    pub fn steps(&self) -> &[u32] {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberPath({self})")
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for step in &self.0 {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}

/// Identity of a type declaration: its interned dotted qualified name
/// (`Shop.Orders.Order`). Partial declarations of one type share a key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeKey(pub Name);

/// An immutable syntax tree.
#[derive(Clone)]
pub struct SyntaxTree {
    arena: SyntaxArena,
    root: NodeId,
    interner: SharedInterner,
}

impl SyntaxTree {
    /// Wrap an arena whose `root` is a `CompilationUnit`.
    pub fn new(arena: SyntaxArena, root: NodeId, interner: SharedInterner) -> Self {
        debug_assert!(
            matches!(arena.kind(root), NodeKind::CompilationUnit { .. }),
            "tree root must be a compilation unit"
        );
        SyntaxTree {
            arena,
            root,
            interner,
        }
    }

    #[inline]
    pub fn arena(&self) -> &SyntaxArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn shared_interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Take the parts back, for building a derived tree.
    pub fn into_parts(self) -> (SyntaxArena, NodeId, SharedInterner) {
        (self.arena, self.root, self.interner)
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena.kind(id)
    }

    /// Text of a token.
    #[inline]
    pub fn text(&self, token: Token) -> &str {
        self.interner.lookup(token.text)
    }

    /// Text of a name.
    #[inline]
    pub fn name_str(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Members of a container node; empty for anything else.
    pub fn members(&self, id: NodeId) -> &[NodeId] {
        match self.arena.kind(id).members() {
            Some(range) => self.arena.node_list(range),
            None => &[],
        }
    }

    /// Node addressed by a path.
    pub fn resolve(&self, path: &MemberPath) -> Option<NodeId> {
        let mut current = self.root;
        for &step in path.steps() {
            current = *self.members(current).get(step as usize)?;
        }
        Some(current)
    }

    /// Nodes along a path, root first, the addressed node last.
    pub fn spine(&self, path: &MemberPath) -> Option<Vec<NodeId>> {
        let mut spine = Vec::with_capacity(path.depth() + 1);
        let mut current = self.root;
        spine.push(current);
        for &step in path.steps() {
            current = *self.members(current).get(step as usize)?;
            spine.push(current);
        }
        Some(spine)
    }

    /// Concatenated text of a token run without trivia (`System.Text`, `List<int>`).
    pub fn tokens_text(&self, range: TokenRange) -> String {
        self.arena
            .tokens(range)
            .iter()
            .map(|tok| self.text(*tok))
            .collect()
    }

    /// Key of the type declared at `type_path`, `None` if the path does not
    /// address a type declaration.
    pub fn type_key(&self, type_path: &MemberPath) -> Option<TypeKey> {
        let spine = self.spine(type_path)?;
        let last = *spine.last()?;
        if !matches!(self.kind(last), NodeKind::TypeDecl { .. }) {
            return None;
        }
        let mut qualified = String::new();
        for id in spine {
            let segment = match *self.kind(id) {
                NodeKind::Namespace { name, .. } => self.tokens_text(name),
                NodeKind::TypeDecl { name, .. } => self.text(name).to_owned(),
                _ => continue,
            };
            if !qualified.is_empty() {
                qualified.push('.');
            }
            qualified.push_str(&segment);
        }
        Some(TypeKey(self.interner.intern(&qualified)))
    }

    /// Key of the type a member is declared in.
    pub fn declaring_type(&self, member_path: &MemberPath) -> Option<TypeKey> {
        self.type_key(&member_path.parent()?)
    }

    /// Simple names of the base list of a type declaration (`class A : B<int>, Ns.IC`
    /// yields `B`, `IC`).
    pub fn base_type_names(&self, type_decl: NodeId) -> Vec<Name> {
        let NodeKind::TypeDecl { header, .. } = *self.kind(type_decl) else {
            return Vec::new();
        };
        let tokens = self.arena.tokens(header);
        let mut names = Vec::new();
        let mut angle = 0u32;
        let mut in_bases = false;
        let mut current: Option<Name> = None;
        for tok in tokens {
            match tok.kind {
                TokenKind::Lt => angle += 1,
                TokenKind::Gt => angle = angle.saturating_sub(1),
                TokenKind::Colon if angle == 0 && !in_bases => in_bases = true,
                TokenKind::Comma if angle == 0 && in_bases => {
                    names.extend(current.take());
                }
                TokenKind::Ident if angle == 0 && in_bases => {
                    if self.text(*tok) == "where" {
                        break;
                    }
                    current = Some(tok.text);
                }
                _ => {}
            }
        }
        names.extend(current);
        names
    }

    /// Every property in the tree with its path, in source order.
    pub fn properties(&self) -> Vec<(MemberPath, NodeId)> {
        struct Collect(Vec<(MemberPath, NodeId)>);

        impl Visitor for Collect {
            fn visit_property(&mut self, _tree: &SyntaxTree, path: &MemberPath, id: NodeId) {
                self.0.push((path.clone(), id));
            }
        }

        let mut collect = Collect(Vec::new());
        collect.visit_tree(self);
        collect.0
    }

    /// Find a property by `Name`, `Type.Name` or a longer qualified suffix
    /// (`Shop.Order.Total`). The first match in source order wins.
    pub fn find_property(&self, query: &str) -> Option<MemberPath> {
        self.properties().into_iter().find_map(|(path, id)| {
            let NodeKind::Property { name, .. } = *self.kind(id) else {
                return None;
            };
            let prop_name = self.text(name);
            let matches = match query.rsplit_once('.') {
                None => prop_name == query,
                Some((owner, member)) => {
                    member == prop_name
                        && self.declaring_type(&path).is_some_and(|key| {
                            let qualified = self.name_str(key.0);
                            qualified == owner || qualified.ends_with(&format!(".{owner}"))
                        })
                }
            };
            matches.then_some(path)
        })
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.root)
            .field("nodes", &self.arena.len())
            .finish_non_exhaustive()
    }
}
