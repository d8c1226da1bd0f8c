//! Append-only syntax arena.
//!
//! All nodes, child lists, token lists and trivia of a tree live in four flat
//! vectors. Nothing is ever removed or overwritten: a rewrite appends the
//! nodes it creates, and ids allocated before the rewrite stay valid and keep
//! their meaning. Two trees that share an arena prefix share every node in it.

use crate::{Node, NodeId, NodeKind, NodeRange, Span, Token, TokenRange, Trivia, TriviaRange};

/// Convert a length to `u32`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Arena for syntax nodes.
///
/// # Index Spaces
///
/// - `nodes`: indexed by [`NodeId`]
/// - `node_lists`: flat `Vec<NodeId>` indexed by [`NodeRange`]
/// - `tokens`: flat `Vec<Token>` indexed by [`TokenRange`]
/// - `trivia`: flat `Vec<Trivia>` indexed by [`TriviaRange`]
#[derive(Clone, Debug, Default)]
pub struct SyntaxArena {
    nodes: Vec<Node>,
    node_lists: Vec<NodeId>,
    tokens: Vec<Token>,
    trivia: Vec<Trivia>,
}

impl SyntaxArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena pre-allocated based on source length.
    ///
    /// Roughly one node per 24 bytes and one token per 6 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        SyntaxArena {
            nodes: Vec::with_capacity(source_len / 24),
            node_lists: Vec::with_capacity(source_len / 48),
            tokens: Vec::with_capacity(source_len / 6),
            trivia: Vec::with_capacity(source_len / 6),
        }
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len(), "syntax nodes"));
        self.nodes.push(Node::new(kind, span));
        id
    }

    /// Get a node.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node's kind.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// Get a node's span.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that an ID was allocated by this arena.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.is_valid() && id.index() < self.nodes.len()
    }

    /// Allocate a contiguous list of child IDs.
    pub fn alloc_node_list(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.node_lists.len(), "node list entries");
        self.node_lists.extend_from_slice(ids);
        NodeRange::new(start, to_u32(ids.len(), "list items"))
    }

    /// Get child IDs from a range.
    #[inline]
    pub fn node_list(&self, range: NodeRange) -> &[NodeId] {
        if range.is_empty() {
            return &[];
        }
        &self.node_lists[range.bounds()]
    }

    /// Allocate a contiguous run of tokens.
    pub fn alloc_tokens(&mut self, tokens: &[Token]) -> TokenRange {
        if tokens.is_empty() {
            return TokenRange::EMPTY;
        }
        let start = to_u32(self.tokens.len(), "tokens");
        self.tokens.extend_from_slice(tokens);
        TokenRange::new(start, to_u32(tokens.len(), "tokens in a run"))
    }

    /// Get tokens from a range.
    #[inline]
    pub fn tokens(&self, range: TokenRange) -> &[Token] {
        if range.is_empty() {
            return &[];
        }
        &self.tokens[range.bounds()]
    }

    /// Allocate a contiguous run of trivia pieces.
    pub fn alloc_trivia(&mut self, trivia: &[Trivia]) -> TriviaRange {
        if trivia.is_empty() {
            return TriviaRange::EMPTY;
        }
        let start = to_u32(self.trivia.len(), "trivia pieces");
        self.trivia.extend_from_slice(trivia);
        TriviaRange::new(start, to_u32(trivia.len(), "trivia pieces in a run"))
    }

    /// Get trivia pieces from a range.
    #[inline]
    pub fn trivia(&self, range: TriviaRange) -> &[Trivia] {
        if range.is_empty() {
            return &[];
        }
        &self.trivia[range.bounds()]
    }
}
