// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sherwood command-line interface.
//!
//! Three subcommands share the same inputs: a dictionary that decides which
//! words exist, and an optional corpus that ranks them. `repl` answers
//! queries read from stdin, `suggest` answers one query, and `stats` reports
//! the shape and estimated memory of the loaded trie.

pub mod display;
pub mod repl;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sherwood",
    about = "Word suggestions over a trie of Robin Hood hash tables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the words and their importance come from.
#[derive(Args, Debug, Clone)]
pub struct Sources {
    /// Dictionary file: whitespace-separated words to store
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Corpus file: every occurrence of a dictionary word raises its importance
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read "word count" pairs from stdin until "stop 0"
    Repl {
        #[command(flatten)]
        sources: Sources,
    },

    /// Print suggestions for a single word
    Suggest {
        #[command(flatten)]
        sources: Sources,

        /// Word to complete or correct
        word: String,

        /// Maximum number of suggestions
        #[arg(short = 'k', long, default_value = "5")]
        count: usize,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show trie structure and memory compared to a 26-way array trie
    Stats {
        #[command(flatten)]
        sources: Sources,
    },
}
