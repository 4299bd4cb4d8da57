use std::fmt::Debug;

/// Trait for types that can serve as labels in a pattern trie.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: edge lists are kept sorted and searched by comparison
/// - `Debug`: debug printing of nodes
pub trait Label: Copy + Eq + Ord + Debug {}

impl<T: Copy + Eq + Ord + Debug> Label for T {}
