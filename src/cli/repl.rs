// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive query loop.
//!
//! Input is a stream of whitespace-separated tokens read in pairs: a word and
//! a count. A pair may span lines. `stop 0` (any case) ends the session, and
//! so does end of input. A count that does not parse drops the pair and the
//! loop carries on.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use sherwood::{HashedTrie, Suggester, Suggestion};

use super::display::{importance_value, pad_right, themed, CYAN, DIM, GRAY, YELLOW};

const PROMPT: &str = "word count> ";

/// Pulls whitespace-separated tokens out of a reader, a line at a time.
struct TokenStream<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> TokenStream<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&self.line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

/// Answer queries from `input` until `stop 0` or end of input.
///
/// Returns the number of queries answered.
pub fn run<R: BufRead, W: Write>(trie: &HashedTrie, input: R, mut out: W) -> io::Result<usize> {
    let suggester = Suggester::new(trie);
    let mut tokens = TokenStream::new(input);
    let mut answered = 0;

    loop {
        write!(out, "{}", themed(CYAN, &[], PROMPT))?;
        out.flush()?;

        let Some(word) = tokens.next_token()? else {
            break;
        };
        let Some(count) = tokens.next_token()? else {
            break;
        };

        let k = match count.parse::<usize>() {
            Ok(k) => k,
            Err(_) => {
                writeln!(
                    out,
                    "{}",
                    themed(
                        YELLOW,
                        &[],
                        &format!("⚠ '{}' is not a count; enter a word and a number", count)
                    )
                )?;
                continue;
            }
        };

        if k == 0 && word.eq_ignore_ascii_case("stop") {
            tracing::debug!(answered, "session stopped");
            break;
        }

        let found = suggester.suggest(&word, k);
        write!(out, "{}", format_suggestions(&found))?;
        answered += 1;
    }

    writeln!(out)?;
    Ok(answered)
}

/// One line per suggestion, in the order given.
pub fn format_suggestions(found: &[Suggestion]) -> String {
    if found.is_empty() {
        return format!("  {}\n", themed(GRAY, &[DIM], "(no suggestions)"));
    }
    found
        .iter()
        .map(|s| {
            format!(
                "  {}{}\n",
                pad_right(&s.word, 24),
                importance_value(s.importance)
            )
        })
        .collect()
}
