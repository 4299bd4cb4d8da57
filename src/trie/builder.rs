use smallvec::SmallVec;

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::automaton::Automaton;
use super::label::Label;
use super::node::{Node, NodeId, ROOT};

/// Trait for types that can be used as a pattern when building or querying
/// a trie.
///
/// Implemented for common string and sequence types so that
/// [`Trie::add`] and [`Automaton::find`] accept them directly without
/// manual conversion.
pub trait IntoPattern<L: Label> {
    /// Collects this pattern into a label buffer.
    fn collect_pattern(self) -> SmallVec<[L; 32]>;
}

// String types → char

impl IntoPattern<char> for &str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &&str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → L

impl<L: Label> IntoPattern<L> for &[L] {
    fn collect_pattern(self) -> SmallVec<[L; 32]> {
        self.iter().copied().collect()
    }
}

impl<L: Label> IntoPattern<L> for Vec<L> {
    fn collect_pattern(self) -> SmallVec<[L; 32]> {
        self.into_iter().collect()
    }
}

impl<L: Label> IntoPattern<L> for &Vec<L> {
    fn collect_pattern(self) -> SmallVec<[L; 32]> {
        self.iter().copied().collect()
    }
}

impl<L: Label, const N: usize> IntoPattern<L> for [L; N] {
    fn collect_pattern(self) -> SmallVec<[L; 32]> {
        self.into_iter().collect()
    }
}

impl<L: Label, const N: usize> IntoPattern<L> for &[L; N] {
    fn collect_pattern(self) -> SmallVec<[L; 32]> {
        self.iter().copied().collect()
    }
}

/// Scratch buffer for a node's edges while compile walks the tree.
type EdgeBuf<L> = SmallVec<[(L, NodeId); 8]>;

/// A pattern trie that compiles into an Aho-Corasick automaton.
///
/// The trie owns every node in a single arena (`Vec<Node>`); tree edges and
/// failure links address nodes by index, so the whole graph lives and dies
/// with the `Trie`. Build it with repeated [`add`](Trie::add) calls, then
/// call [`compile`](Trie::compile) once, then create any number of
/// [`Automaton`]s to scan input streams.
///
/// # Examples
///
/// ```
/// use libac::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("he", 1);
/// trie.add("she", 2);
/// trie.compile();
///
/// let mut scanner = trie.automaton();
/// assert!(scanner.find("she"));
/// ```
pub struct Trie<L: Label, V> {
    nodes: Vec<Node<L, V>>,
}

impl<L: Label, V> Trie<L, V> {
    /// Creates an empty trie containing only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![Node::new()],
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<L, V> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<L, V> {
        &mut self.nodes[id.index()]
    }

    /// Returns the child of `parent` reached by `label`, creating it (with a
    /// failure link defaulted to root) if no such edge exists.
    ///
    /// This is the only mutation path for edges during the build phase; the
    /// sorted-edge-list invariant is maintained by the insert.
    fn add_or_get(&mut self, parent: NodeId, label: L) -> NodeId {
        if let Some(child) = self.node(parent).edges.find(label) {
            return child;
        }
        let id = u32::try_from(self.nodes.len()).expect("node count overflows u32");
        let child = NodeId(id);
        self.nodes.push(Node::new());
        self.node_mut(parent).edges.insert(label, child);
        child
    }

    /// Adds a pattern with its associated value.
    ///
    /// An empty pattern is a no-op. Adding the same pattern twice overwrites
    /// the earlier value (last write wins). If the terminal node already
    /// exists as an interior node of a longer pattern, it is upgraded in
    /// place to an accepting state; its subtree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use libac::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("hers", "hers");
    /// trie.add("he", "he"); // upgrades the interior "he" node
    /// trie.compile();
    /// ```
    pub fn add(&mut self, pattern: impl IntoPattern<L>, value: V) {
        let pattern = pattern.collect_pattern();
        let Some((&last, prefix)) = pattern.split_last() else {
            return;
        };
        let mut node = ROOT;
        for &label in prefix {
            node = self.add_or_get(node, label);
        }
        let terminal = self.add_or_get(node, last);
        self.node_mut(terminal).payload = Some(value);
    }

    /// Computes every node's failure link with a breadth-first pass.
    ///
    /// The queue is seeded with the root's direct children, whose failure
    /// link is simply the root. For each node reached from its parent via
    /// `label`, the parent's already-resolved failure chain is walked until
    /// a state with a `label` edge is found (or the root is reached).
    /// Breadth-first order guarantees that a node's resolution only reads
    /// failure links of shallower, already-resolved nodes.
    ///
    /// `compile` recomputes all links from scratch, so it may be called
    /// again after further [`add`](Trie::add) calls. Traversing between an
    /// `add` and the following `compile` observes stale links and is not
    /// supported.
    pub fn compile(&mut self) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        let root_edges: EdgeBuf<L> = self.node(ROOT).edges.iter().collect();
        for (_, child) in root_edges {
            self.node_mut(child).fail = ROOT;
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            let parent_fail = self.node(id).fail;
            let edges: EdgeBuf<L> = self.node(id).edges.iter().collect();
            for (label, child) in edges {
                let mut state = parent_fail;
                loop {
                    if let Some(candidate) = self.node(state).edges.find(label) {
                        self.node_mut(child).fail = candidate;
                        break;
                    }
                    if state == ROOT {
                        self.node_mut(child).fail = ROOT;
                        break;
                    }
                    state = self.node(state).fail;
                }
                queue.push_back(child);
            }
        }
    }

    /// Creates an automaton positioned at the root of this trie.
    ///
    /// Any number of automatons may be created from one compiled trie; each
    /// carries independent traversal state and only reads the node graph.
    pub fn automaton(&self) -> Automaton<'_, L, V> {
        Automaton::new(self)
    }

    /// Returns the number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<L: Label, V> Default for Trie<L, V> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<L: Label, V> std::fmt::Debug for Trie<L, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl Trie<char, String> {
    /// Builds and compiles a trie from a pattern file.
    ///
    /// Reads patterns from a text file (one pattern per line); each
    /// pattern's value is the pattern itself. Lines starting with '#' are
    /// treated as comments and ignored. Empty lines are skipped. The
    /// returned trie is already compiled.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libac::trie::Trie;
    ///
    /// let trie = Trie::from_file("patterns.txt").unwrap();
    /// assert!(trie.automaton().find("some pattern"));
    /// ```
    pub fn from_file(filename: &str) -> io::Result<Self> {
        let mut trie = Trie::new();
        let file = File::open(filename)?;
        let mut reader = BufReader::new(file);

        // Instead of using BufReader::lines() we call read_line repeatedly,
        // which allows us to reuse the same string instead of allocating a
        // new one for every line.
        let mut buf = String::with_capacity(80);
        loop {
            let bytes_read = reader.read_line(&mut buf)?;
            if bytes_read == 0 {
                break;
            }
            let pattern = buf.trim_end();
            if !pattern.is_empty() && !is_comment(pattern) {
                trie.add(pattern, pattern.to_string());
            }
            buf.clear();
        }
        trie.compile();
        Ok(trie)
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
