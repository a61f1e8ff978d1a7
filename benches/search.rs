use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexiq::patterns;
use lexiq::trie::Trie;

// ── Deterministic corpus ────────────────────────────────────────────────────

/// Every 3- and 4-letter combination over a small alphabet (4608 words) —
/// dense enough that wildcard queries do real backtracking work.
fn corpus() -> Vec<String> {
    const LETTERS: [char; 8] = ['a', 'c', 'e', 'n', 'o', 'r', 's', 't'];
    let mut words = Vec::new();
    for &a in &LETTERS {
        for &b in &LETTERS {
            for &c in &LETTERS {
                words.push(format!("{a}{b}{c}"));
                for &d in &LETTERS {
                    words.push(format!("{a}{b}{c}{d}"));
                }
            }
        }
    }
    words
}

fn build_trie(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for w in words {
        trie.insert(w);
    }
    trie
}

// ── Benchmarks ──────────────────────────────────────────────────────────────

fn bench_build(c: &mut Criterion) {
    let words = corpus();
    c.bench_function("build_4_6k_words", |b| {
        b.iter(|| build_trie(black_box(&words)));
    });
}

fn bench_search(c: &mut Criterion) {
    let trie = build_trie(&corpus());

    c.bench_function("search_sequential_run", |b| {
        b.iter(|| trie.search(patterns::compile(black_box("c*t"))));
    });

    c.bench_function("search_sequential_class", |b| {
        b.iter(|| trie.search(patterns::compile(black_box("[cs]?t?"))));
    });

    c.bench_function("search_anagram", |b| {
        b.iter(|| trie.search(patterns::compile(black_box("*;nest"))));
    });

    c.bench_function("search_circular", |b| {
        b.iter(|| trie.search(patterns::compile(black_box("%cats"))));
    });

    c.bench_function("search_chain", |b| {
        b.iter(|| trie.search(patterns::compile(black_box("CHAIN"))));
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
