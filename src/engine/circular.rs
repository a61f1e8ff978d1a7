//! The circular engine: a word matches if any rotation of the pattern, read
//! forward or backward, matches it sequentially.

use super::{MatchSet, SequentialMatcher};
use crate::atom::Atom;
use crate::trie::Node;

/// Expands an atom list into all `2n` rotation variants (every starting
/// point, both directions) and unions their matches.
///
/// The true start and direction of a circular arrangement are unknown, so
/// every alignment is tried independently; each rotation gets its own atom
/// copies so no consumed/cursor state leaks between alignments. Expansion is
/// deferred until the first match call.
#[derive(Debug, Clone)]
pub struct CircularMatcher {
    atoms: Vec<Atom>,
    rotations: Option<Vec<SequentialMatcher>>,
}

impl CircularMatcher {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms, rotations: None }
    }

    #[cfg(test)]
    pub(crate) fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    fn rotations(&mut self) -> &mut Vec<SequentialMatcher> {
        self.rotations.get_or_insert_with(|| expand_rotations(&self.atoms))
    }
}

fn expand_rotations(atoms: &[Atom]) -> Vec<SequentialMatcher> {
    let mut rotations = Vec::with_capacity(2 * atoms.len());
    let mut ring = atoms.to_vec();
    for _ in 0..atoms.len() {
        let forward = ring.clone();
        let mut backward = ring.clone();
        backward.reverse();
        rotations.push(SequentialMatcher::new(forward));
        rotations.push(SequentialMatcher::new(backward));
        ring.rotate_left(1);
    }
    rotations
}

impl MatchSet for CircularMatcher {
    fn match_letter(&mut self, letter: char, children: &[Node]) -> Vec<Node> {
        let mut results = Vec::new();
        for rotation in self.rotations() {
            results.extend(rotation.match_letter(letter, children));
        }
        results
    }

    fn match_terminator(&mut self) -> Vec<Node> {
        let mut results = Vec::new();
        for rotation in self.rotations() {
            results.extend(rotation.match_terminator());
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::{collect_words, Trie};

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.insert(w);
        }
        trie
    }

    fn literals(s: &str) -> Vec<Atom> {
        s.chars().map(Atom::literal).collect()
    }

    fn words_for(trie: &Trie, mut m: CircularMatcher) -> Vec<String> {
        collect_words(&m.match_nodes(trie.roots()))
    }

    #[test]
    fn test_all_rotations_of_both_directions_match() {
        // For three distinct letters the 2n alignments cover all six
        // permutations, so every scramble of "cat" matches.
        let trie = trie_of(&["atc", "tca", "cat", "tac", "cta", "act"]);
        let m = CircularMatcher::new(literals("cat"));
        assert_eq!(words_for(&trie, m).len(), 6);
    }

    #[test]
    fn test_length_must_still_agree() {
        let trie = trie_of(&["caat", "ca", "catc"]);
        let m = CircularMatcher::new(literals("cat"));
        assert!(words_for(&trie, m).is_empty());
    }

    #[test]
    fn test_rotations_do_not_share_state() {
        // Both the identity rotation and the reverse of a later rotation can
        // match the same word; shared atom state would make the second
        // alignment see already-consumed atoms and miss it.
        let trie = trie_of(&["aba"]);
        let m = CircularMatcher::new(literals("aba"));
        assert_eq!(words_for(&trie, m), vec!["aba"]);
    }

    #[test]
    fn test_repeated_letters_limit_the_match_set() {
        // "aab" rotations: fwd {aab, aba, baa}, rev {baa, aab, aba} — every
        // scramble of two a's and one b, but nothing else.
        let trie = trie_of(&["aab", "aba", "baa", "abb"]);
        let m = CircularMatcher::new(literals("aab"));
        assert_eq!(words_for(&trie, m), vec!["aab", "aba", "baa"]);
    }

    #[test]
    fn test_empty_rotation_set_matches_nothing() {
        let trie = trie_of(&["cat"]);
        let m = CircularMatcher::new(Vec::new());
        assert!(words_for(&trie, m).is_empty());
    }

    #[test]
    fn test_wildcards_rotate_too() {
        // [c, ?] has rotations {c?, ?c} forward and the same set reversed:
        // two-letter words starting or ending in 'c'.
        let trie = trie_of(&["co", "oc", "do", "c"]);
        let m = CircularMatcher::new(vec![Atom::literal('c'), Atom::any_one()]);
        assert_eq!(words_for(&trie, m), vec!["co", "oc"]);
    }
}
