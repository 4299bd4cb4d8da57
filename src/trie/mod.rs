/// Streaming matcher bound to a compiled trie.
pub mod automaton;
/// Trie builder, pattern conversions, and failure-link compilation.
pub mod builder;
/// Sorted edge lists with binary-search lookup.
pub(crate) mod edges;
/// Trait for types that can serve as pattern labels.
pub mod label;
/// Trie node storage and node ids.
pub(crate) mod node;

pub use automaton::Automaton;
pub use builder::{IntoPattern, Trie};
pub use label::Label;
