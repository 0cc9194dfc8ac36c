use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anagrams::errors::WordListError;
use anagrams::index::AnagramIndex;
use anagrams::word_list::WordList;

/// Anagram finder over a word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    word_list: String,
}

/// Entry point of the anagrams CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("ANAGRAMS_DEBUG").is_ok();
    anagrams::log::init_logger(debug_enabled);

    log::debug!("starting anagram finder ({})", env!("GIT_HASH"));

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a WordListError
        if let Some(word_list_err) = e.downcast_ref::<WordListError>() {
            eprintln!("Error: {}", word_list_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the anagrams CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk and build the index.
/// 3. Read query words from stdin, one per line, until an empty line or EOF.
/// 4. For each query, print the space-joined match list on stdout, or "-"
///    when no anagram exists.
/// 5. Print diagnostics (word count, build timing) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., missing word-list file)
/// which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk and build the query-ready index
    let t_build = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let index = AnagramIndex::build(&word_list.words);
    let build_secs = t_build.elapsed().as_secs_f64();

    eprintln!("Indexed {} words in {build_secs:.3}s.", word_list.words.len());

    // 2. Serve queries until an empty line or EOF
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let query = line?;
        if query.is_empty() {
            break;
        }

        let matches = index.find(&query);
        if matches.is_empty() {
            writeln!(stdout, "-")?;
        } else {
            writeln!(stdout, "{}", matches.join(" "))?;
        }
    }

    Ok(())
}
