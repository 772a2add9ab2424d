// Mon Aug 24 2026 - Alex

pub mod error;
pub mod exports;
pub mod members;
pub mod state;
pub mod symbols;

pub use error::{FailureKind, ParseError, ParsePhase, ResolutionFailure};
pub use state::{classify, LineClass, ParseState};

use crate::symbol::SymbolTable;

/// Finished parse of one architecture's dump: the (possibly partial) table
/// plus every non-fatal resolution failure encountered.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub table: SymbolTable,
    pub failures: Vec<ResolutionFailure>,
}

/// Single-pass walk over one architecture's line sequence. Owns the state
/// machine, the in-progress table and the failure list; consumed by `run`.
pub struct ParseSession {
    state: ParseState,
    table: SymbolTable,
    failures: Vec<ResolutionFailure>,
    line_offset: usize,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::with_line_offset(0)
    }

    /// `line_offset` is added to every reported line number, so diagnostics
    /// refer to positions in the full dump file when the caller has already
    /// stripped the preamble.
    pub fn with_line_offset(line_offset: usize) -> Self {
        Self {
            state: ParseState::Symbols,
            table: SymbolTable::new(),
            failures: Vec::new(),
            line_offset,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn run<S: AsRef<str>>(mut self, lines: &[S]) -> Result<ParseReport, ParseError> {
        let mut index = 0;
        while index < lines.len() {
            index += self.step(self.line_offset + index, lines[index].as_ref())?;
        }
        Ok(ParseReport {
            table: self.table,
            failures: self.failures,
        })
    }

    /// Handles one classified line and returns how many lines it consumed,
    /// the fixed boilerplate blocks included.
    fn step(&mut self, line_no: usize, line: &str) -> Result<usize, ParseError> {
        match state::classify(self.state, line) {
            LineClass::SymbolRow => {
                symbols::apply_symbol_row(&mut self.table, line_no, line)?;
                Ok(1)
            }
            LineClass::BeginMembers => {
                self.state = ParseState::Members;
                Ok(1)
            }
            LineClass::MemberRow => {
                members::resolve_member_row(&mut self.table, &mut self.failures, line_no, line)?;
                Ok(1 + state::MEMBER_METADATA_LINES)
            }
            LineClass::BeginExports => {
                self.state = ParseState::Exports;
                Ok(1 + state::EXPORT_HEADER_LINES)
            }
            LineClass::BeginSummary => {
                self.state = ParseState::Done;
                Ok(1)
            }
            LineClass::ExportRow => {
                exports::resolve_export_row(&mut self.table, &mut self.failures, line_no, line)?;
                Ok(1)
            }
            LineClass::EndExports => {
                self.state = ParseState::Done;
                Ok(1)
            }
            LineClass::Ignored => Ok(1),
        }
    }
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::new()
    }
}
