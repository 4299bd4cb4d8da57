use super::edges::Edges;
use super::label::Label;

/// Index of a node within its owning [`Trie`](super::Trie).
///
/// A node's identity is its slot in the trie's node arena; all child and
/// failure references are stored as ids rather than pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) u32);

/// The root node always occupies slot 0.
pub(crate) const ROOT: NodeId = NodeId(0);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single trie node: sorted outgoing edges, one failure link, and an
/// optional payload marking it an accepting state.
///
/// The failure link of a freshly created node defaults to the root; it only
/// becomes meaningful once [`Trie::compile`](super::Trie::compile) runs.
/// The root's failure link is itself.
#[derive(Clone, Debug)]
pub(crate) struct Node<L: Label, V> {
    pub(crate) edges: Edges<L>,
    pub(crate) fail: NodeId,
    pub(crate) payload: Option<V>,
}

impl<L: Label, V> Node<L, V> {
    pub(crate) fn new() -> Self {
        Node {
            edges: Edges::None,
            fail: ROOT,
            payload: None,
        }
    }

    /// True if at least one added pattern ends at this node.
    #[inline]
    pub(crate) fn is_accepting(&self) -> bool {
        self.payload.is_some()
    }
}
