use super::label::Label;
use super::node::NodeId;

/// A compact representation of a node's outgoing edges that doesn't allocate
/// until there are at least three children.
///
/// Invariant: edges are strictly sorted by label with no duplicates, so
/// lookup in the `Many` arm is a binary search and iteration yields labels
/// in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Edges<L: Label> {
    /// No outgoing edges.
    None,
    /// Exactly one edge (label, child).
    One((L, NodeId)),
    /// Exactly two edges, ordered by label.
    Two((L, NodeId, L, NodeId)),
    /// Three or more edges stored in a sorted vector.
    Many(Vec<(L, NodeId)>),
}

impl<L: Label> Edges<L> {
    /// Returns the child reached by `label`, or `None` if no such edge
    /// exists. Absence is a normal outcome, not an error.
    #[inline]
    pub(crate) fn find(&self, label: L) -> Option<NodeId> {
        match self {
            Edges::None => None,
            Edges::One((c, node)) => (*c == label).then_some(*node),
            Edges::Two((c1, n1, c2, n2)) => {
                if label == *c1 {
                    Some(*n1)
                } else if label == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Edges::Many(edges) => edges
                .binary_search_by(|&(c, _)| c.cmp(&label))
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// Inserts a new edge at its sorted position.
    ///
    /// The label must not already be present; [`find`](Edges::find) first,
    /// then insert only on a miss.
    pub(crate) fn insert(&mut self, label: L, child: NodeId) {
        debug_assert!(self.find(label).is_none(), "insert: label already exists");
        match self {
            Edges::None => *self = Edges::One((label, child)),
            Edges::One((c1, n1)) => {
                *self = if label < *c1 {
                    Edges::Two((label, child, *c1, *n1))
                } else {
                    Edges::Two((*c1, *n1, label, child))
                };
            }
            Edges::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(*c1, *n1), (*c2, *n2), (label, child)];
                v.sort_by_key(|&(c, _)| c);
                *self = Edges::Many(v);
            }
            Edges::Many(edges) => {
                let pos = edges.partition_point(|&(c, _)| c < label);
                edges.insert(pos, (label, child));
            }
        }
    }

    /// Gets the edge at the specified index, in ascending label order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<(L, NodeId)> {
        match self {
            Edges::None => None,
            Edges::One(edge) => match index {
                0 => Some(*edge),
                _ => None,
            },
            Edges::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Edges::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Edges::None => 0,
            Edges::One(_) => 1,
            Edges::Two(_) => 2,
            Edges::Many(edges) => edges.len(),
        }
    }

    /// Returns an iterator over all edges in ascending label order.
    ///
    /// Deterministic iteration order matters: compile's breadth-first pass
    /// and any diagnostic enumeration rely on it.
    #[inline]
    pub(crate) fn iter(&self) -> EdgeIter<'_, L> {
        EdgeIter {
            edges: self,
            index: Some(0),
        }
    }
}

/// An iterator over the edges of a node, in ascending label order.
#[derive(Clone)]
pub(crate) struct EdgeIter<'e, L: Label> {
    edges: &'e Edges<L>,
    index: Option<usize>,
}

impl<L: Label> Iterator for EdgeIter<'_, L> {
    type Item = (L, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_edge = self.edges.get(index);
        self.index = if next_edge.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_edge
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.edges.len().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<L: Label> ExactSizeIterator for EdgeIter<'_, L> {}
