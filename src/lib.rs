//! # libac
//!
//! A fast, generic [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! multi-pattern matching library for Rust.
//!
//! An Aho-Corasick automaton is a trie of patterns augmented with suffix
//! "failure" links, letting a single pass over an input stream report, at
//! every position, which of the added patterns end there — in time linear in
//! the input regardless of how many patterns were added.
//!
//! ## Features
//!
//! - **Generic over label type**: patterns are sequences of any type
//!   implementing [`Label`](trie::Label) — `char`, `u8`, `u16`, or your own
//!   token type
//! - **Arbitrary values**: each pattern carries a caller-supplied value,
//!   reported on match
//! - **Streaming**: feed labels one at a time; matches are read after each
//!   step, so the input never needs to be materialized
//! - **Compact**: edges are kept in small sorted lists with binary-search
//!   lookup, not hash maps
//!
//! ## Quick Start
//!
//! Build a [`Trie`](trie::Trie), [`compile`](trie::Trie::compile) it once,
//! then scan with an [`Automaton`](trie::Automaton):
//!
//! ```
//! use libac::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("he", "he");
//! trie.add("she", "she");
//! trie.add("his", "his");
//! trie.add("hers", "hers");
//! trie.compile();
//!
//! let mut found = Vec::new();
//! let mut scanner = trie.automaton();
//! for ch in "ushers".chars() {
//!     scanner.next(ch);
//!     scanner.visit_all(|v| found.push(*v));
//! }
//! assert_eq!(found, ["she", "he", "hers"]);
//! ```
//!
//! ## Generic Usage
//!
//! Labels need not be characters:
//!
//! ```
//! use libac::trie::Trie;
//!
//! let mut trie: Trie<u8, u32> = Trie::new();
//! trie.add([1u8, 2].as_slice(), 12);
//! trie.add([2u8, 3, 4].as_slice(), 234);
//! trie.compile();
//!
//! let mut scanner = trie.automaton();
//! let mut hits = Vec::new();
//! for &byte in &[1u8, 2, 3, 4] {
//!     scanner.next(byte);
//!     scanner.visit_all(|&v| hits.push(v));
//! }
//! assert_eq!(hits, [12, 234]);
//! ```

#![warn(missing_docs)]

/// Core trie and automaton: node storage, builder, and the streaming matcher.
pub mod trie;
