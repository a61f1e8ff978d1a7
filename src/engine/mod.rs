//! `engine` — the strategies that drive atom matchers across the trie.
//!
//! All four engines share one contract, [`MatchSet`]: a letter hook, a
//! terminator hook, and a provided node-list driver that dispatches on node
//! kind and merges per-branch results so the caller sees at most one output
//! letter node per character at every tree position. Engines are stateful and
//! single-use; [`crate::trie::Trie::search`] consumes them by value.

mod anagram;
mod chain;
mod circular;
mod sequential;

pub use anagram::AnagramMatcher;
pub use chain::{AdjacencyTable, ChainMatcher};
pub use circular::CircularMatcher;
pub use sequential::SequentialMatcher;

use crate::atom::Atom;
use crate::trie::{merge_node, LetterNode, Node};

/// The per-query matching contract every engine implements.
pub trait MatchSet {
    /// Match one trie letter node: `letter` plus the sibling list beneath it.
    /// Returns the result nodes this subtree contributes (possibly several
    /// with the same letter, from distinct backtracking branches — the
    /// node-list driver merges them).
    fn match_letter(&mut self, letter: char, children: &[Node]) -> Vec<Node>;

    /// Match a terminator: may this engine state end a word here?
    fn match_terminator(&mut self) -> Vec<Node>;

    /// Drive the engine across a sibling list, merging all branch results
    /// into one well-formed output sibling list.
    fn match_nodes(&mut self, nodes: &[Node]) -> Vec<Node> {
        let mut results = Vec::new();
        for node in nodes {
            let found = match node {
                Node::Letter(l) => self.match_letter(l.letter, &l.children),
                Node::Terminator => self.match_terminator(),
            };
            for n in found {
                merge_node(&mut results, n);
            }
        }
        results
    }
}

/// A compiled query engine; which variant is chosen is decided by the
/// pattern compiler (see [`crate::patterns::compile`]).
#[derive(Debug, Clone)]
pub enum Engine {
    Sequential(SequentialMatcher),
    Anagram(AnagramMatcher),
    Circular(CircularMatcher),
    Chain(ChainMatcher),
}

impl MatchSet for Engine {
    fn match_letter(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        match self {
            Engine::Sequential(m) => m.match_letter(letter, children),
            Engine::Anagram(m) => m.match_letter(letter, children),
            Engine::Circular(m) => m.match_letter(letter, children),
            Engine::Chain(m) => m.match_letter(letter, children),
        }
    }

    fn match_terminator(&mut self) -> Vec<Node> {
        match self {
            Engine::Sequential(m) => m.match_terminator(),
            Engine::Anagram(m) => m.match_terminator(),
            Engine::Circular(m) => m.match_terminator(),
            Engine::Chain(m) => m.match_terminator(),
        }
    }
}

/// Is any atom from `from` onward still able to accept a character?
fn any_open(atoms: &[Atom], from: usize) -> bool {
    atoms[from.min(atoms.len())..].iter().any(Atom::is_open)
}

/// Are all atoms from `from` onward complete? (Vacuously true past the end.)
fn all_complete(atoms: &[Atom], from: usize) -> bool {
    atoms[from.min(atoms.len())..].iter().all(Atom::is_complete)
}

/// Wrap a non-empty descent under a fresh result letter node; an empty
/// descent means this branch matched nothing and contributes nothing.
fn letter_result(letter: char, descended: Vec<Node>) -> Vec<Node> {
    if descended.is_empty() {
        Vec::new()
    } else {
        vec![Node::Letter(LetterNode { letter, children: descended })]
    }
}
