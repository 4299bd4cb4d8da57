use super::builder::{IntoPattern, Trie};
use super::label::Label;
use super::node::{NodeId, ROOT};

/// A streaming matcher bound to a compiled [`Trie`].
///
/// The automaton borrows the trie and tracks one current node. Feed it
/// labels with [`next`](Automaton::next) and read matches after each step
/// with [`visit`](Automaton::visit) or [`visit_all`](Automaton::visit_all).
/// It never mutates the node graph, so any number of automatons can scan
/// independent streams against the same trie at once.
///
/// # Examples
///
/// ```
/// use libac::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("she", "she");
/// trie.add("he", "he");
/// trie.compile();
///
/// let mut scanner = trie.automaton();
/// let mut matches = Vec::new();
/// for (i, ch) in "washed".chars().enumerate() {
///     scanner.next(ch);
///     scanner.visit_all(|v| matches.push((i, *v)));
/// }
/// // "she" and its suffix "he" both end at index 4.
/// assert_eq!(matches, [(4, "she"), (4, "he")]);
/// ```
pub struct Automaton<'t, L: Label, V> {
    trie: &'t Trie<L, V>,
    current: NodeId,
}

impl<'t, L: Label, V> Automaton<'t, L, V> {
    pub(crate) fn new(trie: &'t Trie<L, V>) -> Self {
        Automaton {
            trie,
            current: ROOT,
        }
    }

    /// Consumes one label from the input stream.
    ///
    /// If the current node has an edge for `label`, the automaton follows
    /// it. Otherwise it falls back along failure links until a state with
    /// such an edge is found, or stops at the root. Each call costs at most
    /// the failure-chain depth, bounded by the longest added pattern.
    pub fn next(&mut self, label: L) {
        loop {
            if let Some(child) = self.trie.node(self.current).edges.find(label) {
                self.current = child;
                return;
            }
            if self.current == ROOT {
                return;
            }
            self.current = self.trie.node(self.current).fail;
        }
    }

    /// Returns the value of the pattern ending exactly at the current node,
    /// or `None` if the current state is not accepting.
    ///
    /// This is the longest match ending at the current stream position;
    /// shorter suffix matches are reported by
    /// [`visit_all`](Automaton::visit_all).
    #[inline]
    pub fn value(&self) -> Option<&'t V> {
        self.trie.node(self.current).payload.as_ref()
    }

    /// True if no pattern ends exactly at the current stream position via
    /// the current state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.trie.node(self.current).is_accepting()
    }

    /// Invokes `f` with the value of the pattern ending at the current node,
    /// if the current node is accepting.
    ///
    /// Reports only the longest match ending at this position; see
    /// [`visit_all`](Automaton::visit_all) for suffix matches.
    pub fn visit(&self, mut f: impl FnMut(&V)) {
        if self.current == ROOT {
            return;
        }
        if let Some(value) = self.trie.node(self.current).payload.as_ref() {
            f(value);
        }
    }

    /// Invokes `f` once per pattern ending at the current stream position,
    /// longest first.
    ///
    /// Walks the failure chain from the current node back to (but excluding)
    /// the root, reporting every accepting node's value. A pattern that is a
    /// proper suffix of the consumed input shows up here even when a longer
    /// pattern ends at the same position.
    pub fn visit_all(&self, mut f: impl FnMut(&V)) {
        let mut state = self.current;
        while state != ROOT {
            if let Some(value) = self.trie.node(state).payload.as_ref() {
                f(value);
            }
            state = self.trie.node(state).fail;
        }
    }

    /// One-shot prefix/stream test: resets, then feeds `pattern` through
    /// [`next`](Automaton::next), returning `true` as soon as some prefix of
    /// `pattern` lands on an accepting state (via the full failure chain).
    ///
    /// This is *not* a whole-pattern membership test: a prefix of `pattern`
    /// matching any added pattern suffices. The walk also gives up early,
    /// returning `false`, if a non-root state ever falls all the way back to
    /// the root without accepting.
    ///
    /// # Examples
    ///
    /// ```
    /// use libac::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add("she", ());
    /// trie.compile();
    ///
    /// let mut scanner = trie.automaton();
    /// assert!(scanner.find("she"));
    /// assert!(scanner.find("shells")); // prefix "she" accepts
    /// assert!(!scanner.find("sh"));
    /// ```
    pub fn find(&mut self, pattern: impl IntoPattern<L>) -> bool {
        self.reset();
        let pattern = pattern.collect_pattern();
        for &label in pattern.iter() {
            let was = self.current;
            self.next(label);
            let mut matched = false;
            self.visit_all(|_| matched = true);
            if matched {
                return true;
            }
            if self.current == ROOT && was != ROOT {
                return false;
            }
        }
        false
    }

    /// Returns the automaton to the root state.
    pub fn reset(&mut self) {
        self.current = ROOT;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn compiled() -> Trie<char, &'static str> {
        let mut trie = Trie::new();
        for p in ["his", "he", "she", "hers"] {
            trie.add(p, p);
        }
        trie.compile();
        trie
    }

    fn scan_visit(trie: &Trie<char, &'static str>, text: &str) -> Vec<(usize, &'static str)> {
        let mut scanner = trie.automaton();
        let mut events = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            scanner.next(ch);
            scanner.visit(|v| events.push((i, *v)));
        }
        events
    }

    fn scan_visit_all(trie: &Trie<char, &'static str>, text: &str) -> Vec<(usize, &'static str)> {
        let mut scanner = trie.automaton();
        let mut events = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            scanner.next(ch);
            scanner.visit_all(|v| events.push((i, *v)));
        }
        events
    }

    #[test]
    fn reference_scenario_longest_matches() {
        let trie = compiled();
        let events = scan_visit(&trie, "123he456thehisshes0he");
        assert_eq!(
            events,
            [(4, "he"), (10, "he"), (13, "his"), (16, "she"), (20, "he")]
        );
    }

    #[test]
    fn reference_scenario_all_matches() {
        let trie = compiled();
        let events = scan_visit_all(&trie, "123he456thehisshes0he");
        // At index 16 "she" completes and its suffix "he" ends there too.
        assert_eq!(
            events,
            [
                (4, "he"),
                (10, "he"),
                (13, "his"),
                (16, "she"),
                (16, "he"),
                (20, "he")
            ]
        );
    }

    #[test]
    fn visit_all_reports_longest_first() {
        let trie = compiled();
        let mut scanner = trie.automaton();
        for ch in "she".chars() {
            scanner.next(ch);
        }
        let mut order = Vec::new();
        scanner.visit_all(|v| order.push(*v));
        assert_eq!(order, ["she", "he"]);
    }

    #[test]
    fn value_and_is_empty() {
        let trie = compiled();
        let mut scanner = trie.automaton();
        assert!(scanner.is_empty());
        scanner.next('h');
        assert!(scanner.is_empty());
        assert_eq!(scanner.value(), None);
        scanner.next('e');
        assert!(!scanner.is_empty());
        assert_eq!(scanner.value(), Some(&"he"));
    }

    #[test]
    fn find_matches_and_misses() {
        let trie = compiled();
        let mut scanner = trie.automaton();
        assert!(scanner.find("she"));
        assert!(!scanner.find("sh"));
        // A prefix landing on an accepting state suffices.
        assert!(scanner.find("shells"));
        // Leading labels unknown to the trie are skipped at the root.
        assert!(scanner.find("xshe"));
        assert!(scanner.find("ushers"));
    }

    #[test]
    fn find_gives_up_on_root_fallback() {
        let trie = compiled();
        let mut scanner = trie.automaton();
        // "s" then "x" falls from a non-root state all the way back to the
        // root without accepting, so the walk stops even though "he"
        // appears later in the input.
        assert!(!scanner.find("sxhe"));
    }

    #[test]
    fn reset_replays_identically() {
        let trie = compiled();
        let text = "123he456thehisshes0he";
        let first = scan_visit_all(&trie, text);
        let second = scan_visit_all(&trie, text);
        assert_eq!(first, second);

        let mut scanner = trie.automaton();
        for ch in "she".chars() {
            scanner.next(ch);
        }
        scanner.reset();
        assert!(scanner.is_empty());
        let mut after_reset = Vec::new();
        scanner.visit_all(|v| after_reset.push(*v));
        assert!(after_reset.is_empty());
    }

    #[test]
    fn automatons_are_independent() {
        let trie = compiled();
        let mut a = trie.automaton();
        let mut b = trie.automaton();
        for ch in "sh".chars() {
            a.next(ch);
        }
        b.next('h');
        b.next('e');
        assert!(a.is_empty());
        assert_eq!(b.value(), Some(&"he"));
    }

    #[test]
    fn empty_trie_never_matches() {
        let mut trie: Trie<char, i32> = Trie::new();
        trie.compile();
        let mut scanner = trie.automaton();
        for ch in "anything".chars() {
            scanner.next(ch);
            assert!(scanner.is_empty());
        }
        assert!(!scanner.find("anything"));
    }

    #[test]
    fn partial_match_falls_back_without_losing_suffix() {
        let trie = compiled();
        let mut scanner = trie.automaton();
        // "shis": the "sh" path fails on 'i' but falls back to "h", so the
        // automaton still completes "his".
        let mut events = Vec::new();
        for ch in "shis".chars() {
            scanner.next(ch);
            scanner.visit_all(|v| events.push(*v));
        }
        assert_eq!(events, ["his"]);
    }

    #[test]
    fn generic_u8_stream() {
        let mut trie: Trie<u8, u32> = Trie::new();
        trie.add([1u8, 2].as_slice(), 12);
        trie.add([2u8, 3, 4].as_slice(), 234);
        trie.compile();

        let mut scanner = trie.automaton();
        let mut events = Vec::new();
        for (i, &b) in [1u8, 2, 3, 4].iter().enumerate() {
            scanner.next(b);
            scanner.visit_all(|&v| events.push((i, v)));
        }
        assert_eq!(events, [(1, 12), (3, 234)]);
    }
}
