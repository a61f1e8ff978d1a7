//! `patterns` — compiles a query string into a ready-to-run engine.
//!
//! Syntax, scanned left to right:
//!
//! ```text
//! pattern   = { token }
//! token     = "*"            any run of letters (consecutive "*" collapse)
//!           | "?" | "."      exactly one letter
//!           | "[" chars "]"  one letter from the set ("[]" contributes nothing)
//!           | ";"            everything after it goes to the anagram pool
//!           | "%"            select circular matching (contributes no atom)
//!           | char           that literal character
//! ```
//!
//! An unterminated `[` is not an error: it degrades to a literal `[`.
//!
//! Exactly one engine is selected per pattern: anagram if the pattern
//! contains [`ANAGRAM_SEPARATOR`], else circular if it contains
//! [`ROTATION_MARKER`], else the letter-chain engine if the whole pattern
//! equals [`CHAIN_KEYWORD`], else sequential. Compilation is total — every
//! input string produces an engine.

use crate::atom::Atom;
use crate::engine::{
    AnagramMatcher, ChainMatcher, CircularMatcher, Engine, SequentialMatcher,
};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{anychar, one_of};
use nom::combinator::map;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use std::collections::HashSet;

/// Splits the ordered part of an anagram pattern from its pool.
pub const ANAGRAM_SEPARATOR: char = ';';

/// Selects the circular engine.
pub const ROTATION_MARKER: char = '%';

/// The reserved pattern that selects the letter-chain engine.
pub const CHAIN_KEYWORD: &str = "CHAIN";

/// One lexed pattern element, before engine-specific assembly.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Run,
    AnyOne,
    OneOf(HashSet<char>),
    Pool,
    Rotate,
    Literal(char),
}

// === Token parsers ===

fn run(input: &str) -> IResult<&str, Token> {
    map(tag("*"), |_| Token::Run).parse(input)
}
fn any_one(input: &str) -> IResult<&str, Token> {
    map(one_of("?."), |_| Token::AnyOne).parse(input)
}
fn pool_marker(input: &str) -> IResult<&str, Token> {
    map(tag(";"), |_| Token::Pool).parse(input)
}
fn rotate_marker(input: &str) -> IResult<&str, Token> {
    map(tag("%"), |_| Token::Rotate).parse(input)
}
fn class(input: &str) -> IResult<&str, Token> {
    map(delimited(tag("["), take_until("]"), tag("]")), |body: &str| {
        Token::OneOf(body.chars().collect())
    })
    .parse(input)
}
fn literal(input: &str) -> IResult<&str, Token> {
    map(anychar, Token::Literal).parse(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    // `class` must get first crack at '[' so that only an unterminated
    // bracket falls through to `literal`.
    alt((class, run, any_one, pool_marker, rotate_marker, literal)).parse(input)
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        // `literal` accepts any character, so lexing cannot fail.
        let Ok((next, tok)) = token(rest) else { break };
        tokens.push(tok);
        rest = next;
    }
    tokens
}

/// Accumulates atoms, collapsing consecutive `*` into one run atom.
#[derive(Default)]
struct AtomBuilder {
    atoms: Vec<Atom>,
    last_was_run: bool,
}

impl AtomBuilder {
    fn push_run(&mut self) {
        if !self.last_was_run {
            self.atoms.push(Atom::run());
        }
        self.last_was_run = true;
    }

    /// Any non-run token ends a run of `*`s, even one contributing no atom.
    fn push(&mut self, atom: Option<Atom>) {
        self.last_was_run = false;
        if let Some(atom) = atom {
            self.atoms.push(atom);
        }
    }

    fn finish(self) -> Vec<Atom> {
        self.atoms
    }
}

/// An empty class (`[]`) contributes no atom; any other set matches one
/// letter out of it.
fn class_atom(letters: HashSet<char>) -> Option<Atom> {
    if letters.is_empty() { None } else { Some(Atom::one_of(letters)) }
}

fn compile_sequential(pattern: &str) -> SequentialMatcher {
    let mut builder = AtomBuilder::default();
    for tok in tokenize(pattern) {
        match tok {
            Token::Run => builder.push_run(),
            Token::AnyOne => builder.push(Some(Atom::any_one())),
            Token::OneOf(set) => builder.push(class_atom(set)),
            Token::Literal(c) => builder.push(Some(Atom::literal(c))),
            // Unreachable here: their presence selects another engine.
            Token::Pool => builder.push(Some(Atom::literal(ANAGRAM_SEPARATOR))),
            Token::Rotate => builder.push(Some(Atom::literal(ROTATION_MARKER))),
        }
    }
    SequentialMatcher::new(builder.finish())
}

fn compile_anagram(pattern: &str) -> AnagramMatcher {
    let mut ordered = AtomBuilder::default();
    let mut pool = AtomBuilder::default();
    let mut in_pool = false;
    for tok in tokenize(pattern) {
        let builder = if in_pool { &mut pool } else { &mut ordered };
        match tok {
            Token::Pool => {
                in_pool = true;
            }
            Token::Run => builder.push_run(),
            Token::AnyOne => builder.push(Some(Atom::any_one())),
            Token::OneOf(set) => builder.push(class_atom(set)),
            Token::Literal(c) => builder.push(Some(Atom::literal(c))),
            // '%' carries no meaning in anagram mode; it is a plain literal.
            Token::Rotate => builder.push(Some(Atom::literal(ROTATION_MARKER))),
        }
    }
    AnagramMatcher::new(ordered.finish(), pool.finish())
}

fn compile_circular(pattern: &str) -> CircularMatcher {
    let mut builder = AtomBuilder::default();
    for tok in tokenize(pattern) {
        match tok {
            Token::Run => builder.push_run(),
            Token::AnyOne => builder.push(Some(Atom::any_one())),
            Token::OneOf(set) => builder.push(class_atom(set)),
            Token::Literal(c) => builder.push(Some(Atom::literal(c))),
            // The marker selected this engine; it contributes no atom.
            Token::Rotate => builder.push(None),
            Token::Pool => builder.push(Some(Atom::literal(ANAGRAM_SEPARATOR))),
        }
    }
    CircularMatcher::new(builder.finish())
}

/// Compile `pattern` into its engine.
#[must_use]
pub fn compile(pattern: &str) -> Engine {
    let engine = if pattern.contains(ANAGRAM_SEPARATOR) {
        Engine::Anagram(compile_anagram(pattern))
    } else if pattern.contains(ROTATION_MARKER) {
        Engine::Circular(compile_circular(pattern))
    } else if pattern == CHAIN_KEYWORD {
        Engine::Chain(ChainMatcher::new())
    } else {
        Engine::Sequential(compile_sequential(pattern))
    };

    log::debug!(
        "compiled pattern {pattern:?} into {} engine",
        match engine {
            Engine::Sequential(_) => "sequential",
            Engine::Anagram(_) => "anagram",
            Engine::Circular(_) => "circular",
            Engine::Chain(_) => "chain",
        }
    );

    engine
}
