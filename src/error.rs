// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for record store operations

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AssignError>;

/// A malformed line in an assignment text file.
///
/// Import recovers from these line by line, so they are collected in
/// `ImportSummary::errors` rather than returned as an `AssignError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid format in line {line_number}: {content}")]
pub struct ParseError {
    /// 1-based line number within the source
    pub line_number: usize,
    /// The offending line, trimmed
    pub content: String,
}

/// Errors surfaced by record store operations
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },

    #[error("No file path specified")]
    MissingPath,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssignError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssignError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AssignError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 is out of range for 2 entries");

        assert_eq!(AssignError::MissingPath.to_string(), "No file path specified");

        let parse = ParseError {
            line_number: 2,
            content: "Cube|Red".into(),
        };
        assert_eq!(parse.to_string(), "Invalid format in line 2: Cube|Red");
    }
}
