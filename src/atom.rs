//! `atom` — the primitive per-character matchers a compiled pattern is made
//! of.
//!
//! Every atom answers the same four questions: can it accept this character
//! (`match_letter`), can it give that character back (`unmatch_letter`), can
//! it still accept more (`is_open`), and has it accepted enough for the query
//! to advance past it (`is_complete`). The unmatch operation exists because
//! engines reuse one atom across sibling branches while backtracking: a
//! failed branch must leave the atom exactly as it found it.

use std::collections::HashSet;

/// One pattern element.
///
/// `Run` (`*`) is the odd one out: it is always open and always complete, so
/// it never blocks advancement and never runs out. The other three consume
/// exactly one character and then close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// Exactly one specific character.
    Literal { letter: char, consumed: bool },
    /// Any single character (`?` or `.`).
    AnyOne { consumed: bool },
    /// Any single character from a fixed set (`[...]`).
    OneOf { letters: HashSet<char>, consumed: bool },
    /// Any character, any number of times (`*`).
    Run,
}

impl Atom {
    pub fn literal(letter: char) -> Self {
        Atom::Literal { letter, consumed: false }
    }

    pub fn any_one() -> Self {
        Atom::AnyOne { consumed: false }
    }

    pub fn one_of(letters: HashSet<char>) -> Self {
        Atom::OneOf { letters, consumed: false }
    }

    pub fn run() -> Self {
        Atom::Run
    }

    /// Try to consume `letter`. Returns whether the atom accepted it.
    pub fn match_letter(&mut self, letter: char) -> bool {
        match self {
            Atom::Literal { letter: expected, consumed } => {
                if *consumed || *expected != letter {
                    false
                } else {
                    *consumed = true;
                    true
                }
            }
            Atom::AnyOne { consumed } => {
                if *consumed {
                    false
                } else {
                    *consumed = true;
                    true
                }
            }
            Atom::OneOf { letters, consumed } => {
                if *consumed || !letters.contains(&letter) {
                    false
                } else {
                    *consumed = true;
                    true
                }
            }
            Atom::Run => true,
        }
    }

    /// Give back the most recently consumed character, restoring the
    /// pre-match state. Returns whether there was anything to give back.
    pub fn unmatch_letter(&mut self, letter: char) -> bool {
        match self {
            Atom::Literal { letter: expected, consumed } => {
                debug_assert_eq!(*expected, letter, "unmatching a letter that was never matched");
                std::mem::replace(consumed, false)
            }
            Atom::AnyOne { consumed } | Atom::OneOf { consumed, .. } => {
                let _ = letter;
                std::mem::replace(consumed, false)
            }
            Atom::Run => true,
        }
    }

    /// Can this atom still accept another character?
    pub fn is_open(&self) -> bool {
        match self {
            Atom::Literal { consumed, .. }
            | Atom::AnyOne { consumed }
            | Atom::OneOf { consumed, .. } => !consumed,
            Atom::Run => true,
        }
    }

    /// Has this atom accepted enough for the query to advance past it?
    pub fn is_complete(&self) -> bool {
        match self {
            Atom::Literal { consumed, .. }
            | Atom::AnyOne { consumed }
            | Atom::OneOf { consumed, .. } => *consumed,
            Atom::Run => true,
        }
    }
}
