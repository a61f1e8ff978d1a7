//! The default engine: atoms must be satisfied left to right.

use super::{all_complete, any_open, letter_result, MatchSet};
use crate::atom::Atom;
use crate::trie::Node;

/// Drives an ordered atom list across the trie with a cursor.
///
/// Invariant: every atom before the cursor is complete. The cursor is only
/// ever advanced transiently — around a recursive descent — and restored on
/// the way out, so one matcher instance can be retried against every sibling
/// branch of the trie.
#[derive(Debug, Clone)]
pub struct SequentialMatcher {
    atoms: Vec<Atom>,
    position: usize,
}

impl SequentialMatcher {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms, position: 0 }
    }

    #[cfg(test)]
    pub(crate) fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The atom consumed `letter`; descend into its children and wrap any
    /// downstream match in a result node.
    ///
    /// If the atom is still open it may keep consuming, so the cursor stays
    /// put; if it closed, the next atom takes over for the descent.
    fn match_with_current(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        let descended = if self.atoms[self.position].is_open() {
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

impl MatchSet for SequentialMatcher {
    fn match_letter(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        let mut results = Vec::new();

        // Nothing from the cursor onward can take a character: dead branch.
        // (Deliberately not the same thing as "match complete" — a fully
        // consumed pattern still *completes* at a terminator, it just cannot
        // consume further letters.)
        if !any_open(&self.atoms, self.position) {
            return results;
        }

        // A complete-but-open atom must not block advancement: the same
        // letter also gets offered to the next atom.
        if self.atoms[self.position].is_complete() {
            self.position += 1;
            results.extend(self.match_letter(letter, children));
            self.position -= 1;
        }

        if self.atoms[self.position].match_letter(letter) {
            results.extend(self.match_with_current(letter, children));
            // Restore for the caller's next sibling branch, match or not.
            self.atoms[self.position].unmatch_letter(letter);
        }

        results
    }

    fn match_terminator(&mut self) -> Vec<Node> {
        if all_complete(&self.atoms, self.position) {
            vec![Node::Terminator]
        } else {
            Vec::new()
        }
    }
}
