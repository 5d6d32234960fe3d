// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced to callers.
///
/// Malformed tokens and absent words are not errors: the first are filtered
/// during ingestion, the second come back as `false` / `None`.
#[derive(Debug)]
pub enum Error {
    /// An ingestion file could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// Reading from an already open source failed.
    Read(io::Error),
    /// Word exceeds the maximum trie depth.
    WordTooLong { len: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            Error::Read(source) => write!(f, "failed to read input: {}", source),
            Error::WordTooLong { len, max } => {
                write!(f, "word of {} characters exceeds the limit of {}", len, max)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } | Error::Read(source) => Some(source),
            Error::WordTooLong { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Read(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
