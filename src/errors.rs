// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum EditorError {
    // Non-positive position query and the like.
    InvalidArgument(String),
    // Range copy whose end node cannot be reached from its start node.
    InvalidRange(String),
    // Absent start node, or removing after a node that has no successor.
    MissingReference(String),
    Io(io::Error),
    Format(String),
}

// These allow conversion to EditorError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for EditorError {
    fn from(e: io::Error) -> Self {
        EditorError::Io(e)
    }
}

impl From<String> for EditorError {
    fn from(s: String) -> Self {
        EditorError::Format(s)
    }
}

impl From<regex::Error> for EditorError {
    fn from(e: regex::Error) -> Self {
        EditorError::Format(format!("bad pattern: {}", e))
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EditorError::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
            EditorError::MissingReference(msg) => write!(f, "Missing reference: {}", msg),
            EditorError::Io(e) => write!(f, "I/O error: {}", e),
            EditorError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for EditorError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EditorError::Io(e) => Some(e),
            _ => None,
        }
    }
}
