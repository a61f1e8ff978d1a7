//! The anagram engine: an ordered atom list plus an unordered pool that must
//! be used up, in any order, alongside it.

use super::{all_complete, any_open, letter_result, MatchSet};
use crate::atom::Atom;
use crate::trie::Node;

/// Like the sequential engine, but every consumed character must be accepted
/// by the ordered cursor's atom AND by some atom in the free pool — the two
/// are consumed together, and a word only ends once the whole pool is spent.
///
/// Note this is stricter than a plain multiset anagram: a literal in the
/// ordered list can only ever consume a character that the pool can also
/// supply. The useful shape is wildcards in the ordered list and the letter
/// bank in the pool (`"*;stop"`, `"????;stop"`).
#[derive(Debug, Clone)]
pub struct AnagramMatcher {
    ordered: Vec<Atom>,
    pool: Vec<Atom>,
    position: usize,
}

impl AnagramMatcher {
    pub fn new(ordered: Vec<Atom>, pool: Vec<Atom>) -> Self {
        Self { ordered, pool, position: 0 }
    }

    #[cfg(test)]
    pub(crate) fn ordered(&self) -> &[Atom] {
        &self.ordered
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &[Atom] {
        &self.pool
    }

    /// Ordered cursor and one pool atom have both consumed `letter`; descend.
    fn match_with_current(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        let descended = if self.ordered[self.position].is_open() {
            self.match_nodes(children)
        } else {
            self.position += 1;
            let nodes = self.match_nodes(children);
            self.position -= 1;
            nodes
        };
        letter_result(letter, descended)
    }
}

impl MatchSet for AnagramMatcher {
    fn match_letter(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        let mut results = Vec::new();

        if !any_open(&self.ordered, self.position) {
            return results;
        }

        if self.ordered[self.position].is_complete() {
            self.position += 1;
            results.extend(self.match_letter(letter, children));
            self.position -= 1;
        }

        if self.ordered[self.position].match_letter(letter) {
            // Try every pool atom that can also supply this character; each
            // candidate stays consumed for the descent and is restored after.
            for ix in 0..self.pool.len() {
                if self.pool[ix].match_letter(letter) {
                    results.extend(self.match_with_current(letter, children));
                    self.pool[ix].unmatch_letter(letter);
                }
            }
            self.ordered[self.position].unmatch_letter(letter);
        }

        results
    }

    fn match_terminator(&mut self) -> Vec<Node> {
        if all_complete(&self.ordered, self.position) && self.pool.iter().all(Atom::is_complete) {
            vec![Node::Terminator]
        } else {
            Vec::new()
        }
    }
}
