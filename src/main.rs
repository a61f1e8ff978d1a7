use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use lexiq::patterns;
use lexiq::trie::{collect_words, Trie};
use lexiq::word_list::WordList;

/// Pattern search over a word trie
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The pattern to search for (e.g. "c*t", "?at", "[bc]at", "*;stop", "%cat")
    pattern: String,

    /// Path to the word list file (one word per line, optional /annotation)
    #[arg(short, long)]
    word_list: String,
}

/// Entry point: delegates to [`try_main`] and turns any error into a
/// message on stderr plus a nonzero exit code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("LEXIQ_DEBUG").is_ok();
    lexiq::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core CLI flow:
/// 1. Parse arguments.
/// 2. Load the word list and build the trie (timed).
/// 3. Compile the pattern and run the query (timed).
/// 4. Print matches on stdout, diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let word_count = word_list.words.len();

    let mut trie = Trie::new();
    for word in &word_list.words {
        trie.insert(word);
    }
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!("indexed {word_count} words in {load_secs:.3}s");

    let t_search = Instant::now();
    let matched = trie.search(patterns::compile(&cli.pattern));
    let found = collect_words(&matched);
    let search_secs = t_search.elapsed().as_secs_f64();

    for word in &found {
        println!("{word}");
    }

    eprintln!(
        "Indexed {word_count} words in {load_secs:.3}s; matched {} in {search_secs:.3}s.",
        found.len()
    );

    Ok(())
}
