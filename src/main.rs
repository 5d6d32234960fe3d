// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::Path;
use std::sync::Once;

use clap::Parser;
use serde::Serialize;

use sherwood::{
    load_corpus_file, load_dictionary_file, verify_trie, ArrayTrie, HashedTrie, IngestReport,
    Suggester, Suggestion,
};

mod cli;
use cli::display::{
    field, format_size, load_value, ratio, section_bot, section_top, themed, BOLD, GREEN, RED,
};
use cli::{Cli, Commands, Sources};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber, but only when `RUST_LOG` asks for one.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { sources } => run_repl(&sources),
        Commands::Suggest {
            sources,
            word,
            count,
            json,
        } => run_suggest(&sources, &word, count, json),
        Commands::Stats { sources } => run_stats(&sources),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load the dictionary, then apply the corpus if one was given.
fn load(sources: &Sources) -> sherwood::Result<HashedTrie> {
    let mut trie = HashedTrie::new();

    let report = load_dictionary_file(&mut trie, &sources.dictionary)?;
    log_report("dictionary", &sources.dictionary, &report);

    if let Some(corpus) = &sources.corpus {
        let report = load_corpus_file(&mut trie, corpus)?;
        log_report("corpus", corpus, &report);
    }

    Ok(trie)
}

fn log_report(kind: &str, path: &Path, report: &IngestReport) {
    tracing::info!(
        kind,
        path = %path.display(),
        tokens = report.tokens,
        accepted = report.accepted,
        rejected = report.rejected,
        matched = report.matched,
        ignored = report.ignored,
        "ingested"
    );
}

fn run_repl(sources: &Sources) -> CliResult {
    let trie = load(sources)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::repl::run(&trie, stdin.lock(), stdout.lock())?;

    print_stats(&trie);
    Ok(())
}

#[derive(Serialize)]
struct SuggestOutput<'a> {
    query: &'a str,
    count: usize,
    suggestions: Vec<Suggestion>,
}

fn run_suggest(sources: &Sources, word: &str, count: usize, json: bool) -> CliResult {
    let trie = load(sources)?;
    let suggestions = Suggester::new(&trie).suggest(word, count);

    if json {
        let output = SuggestOutput {
            query: word,
            count,
            suggestions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", cli::repl::format_suggestions(&suggestions));
    }
    Ok(())
}

fn run_stats(sources: &Sources) -> CliResult {
    let trie = load(sources)?;
    print_stats(&trie);
    verify_trie(&trie)?;
    Ok(())
}

/// Structure summary plus a memory comparison against the array trie.
fn print_stats(trie: &HashedTrie) {
    let stats = trie.stats();

    let mut array = ArrayTrie::new();
    for (word, _) in trie.words() {
        array.insert(&word);
    }
    let array_bytes = array.memory_estimate();

    let invariants = match verify_trie(trie) {
        Ok(()) => themed(GREEN, &[BOLD], "✓ hold"),
        Err(e) => themed(RED, &[BOLD], &format!("✗ {}", e)),
    };

    println!("{}", section_top("TRIE"));
    println!("{}", field("words", &stats.words.to_string()));
    println!("{}", field("level tables", &stats.tables.to_string()));
    println!("{}", field("slots", &stats.slots.to_string()));
    println!("{}", field("deepest level", &stats.depth.to_string()));
    println!("{}", field("longest probe", &stats.max_probe_length.to_string()));
    println!("{}", field("peak load factor", &load_value(stats.peak_load_factor)));
    println!("{}", field("invariants", &invariants));
    println!("{}", section_bot());

    println!("{}", section_top("MEMORY"));
    println!("{}", field("hashed trie", &format_size(stats.memory_bytes)));
    println!("{}", field("array trie", &format_size(array_bytes)));
    println!(
        "{}",
        field("hashed / array", &ratio(stats.memory_bytes, array_bytes))
    );
    println!("{}", section_bot());
}
