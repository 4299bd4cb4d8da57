//! Example: streaming a text through an Aho-Corasick automaton.
//!
//! This shows the full build/compile/scan cycle: patterns go into a `Trie`,
//! `compile` wires up the failure links, and an `Automaton` consumes the
//! text one character at a time, reporting every pattern that ends at each
//! position.
//!
//! Run with: cargo run --example scanner

use libac::trie::Trie;

fn main() {
    let mut trie = Trie::new();
    for pattern in ["he", "she", "his", "hers"] {
        trie.add(pattern, pattern);
    }
    trie.compile();
    println!("{trie:?}");

    let text = "123he456thehisshes0he";
    println!("scanning {text:?}:");

    let mut scanner = trie.automaton();
    for (i, ch) in text.chars().enumerate() {
        scanner.next(ch);
        scanner.visit_all(|pattern| {
            let start = i + 1 - pattern.chars().count();
            println!("  [{start:2}..={i:2}] {pattern}");
        });
    }

    // One-shot stream tests.
    println!("\nfind:");
    for probe in ["she", "sh", "ushers"] {
        let found = scanner.find(probe);
        println!("  {probe}: {}", if found { "yes" } else { "no" });
    }
}
