// Mon Aug 24 2026 - Alex

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Fatal malformed-input conditions. Any of these aborts the architecture's
/// parse: a format violation means the report is not from the expected
/// dumper version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: symbol row must be `<hex-offset> <name>`, got {text:?}")]
    MalformedSymbolRow { line: usize, text: String },
    #[error("line {line}: invalid hex offset {token:?}")]
    InvalidOffset { line: usize, token: String },
    #[error("line {line}: malformed archive member row {text:?}")]
    MalformedMemberRow { line: usize, text: String },
    #[error("line {line}: member name {name:?} must not contain whitespace")]
    MemberNameWhitespace { line: usize, name: String },
    #[error("line {line}: malformed export row {text:?}")]
    MalformedExportRow { line: usize, text: String },
    #[error("line {line}: invalid export ordinal {token:?}")]
    InvalidOrdinal { line: usize, token: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePhase {
    Symbols,
    Members,
    Exports,
}

impl fmt::Display for ParsePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePhase::Symbols => write!(f, "symbols"),
            ParsePhase::Members => write!(f, "members"),
            ParsePhase::Exports => write!(f, "exports"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Archive member row references an offset never seen in the symbol phase.
    OffsetNotFound { offset: String },
    /// Export row names a symbol absent from the table, `__imp_` form included.
    NameNotFound { name: String },
}

/// Non-fatal resolution miss, recorded and surfaced so the caller gets a
/// best-effort table plus the complete failure list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionFailure {
    pub phase: ParsePhase,
    pub line: usize,
    pub raw: String,
    pub kind: FailureKind,
}
