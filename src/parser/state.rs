// Mon Aug 24 2026 - Alex

/// Lines the dumper emits before the first symbol row: banner, file-type
/// line, and the first linker member with its metadata block.
pub const PREAMBLE_LINES: usize = 18;

/// Fixed metadata block after every archive member header
/// (time/date, uid, gid, mode, size, terminator, trailing blank).
pub const MEMBER_METADATA_LINES: usize = 7;

/// Column-header block after the export section header.
pub const EXPORT_HEADER_LINES: usize = 3;

pub const EXPORTS_HEADER: &str = "     Exports";
pub const SUMMARY_HEADER: &str = "  Summary";
pub const MEMBER_PREFIX: &str = "Archive member name at ";

/// Ordinal column width; export rows indented this far are continuation
/// rows with no ordinal of their own.
pub const CONTINUATION_INDENT: &str = "                  ";

/// Strict forward-only cycle per architecture. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Symbols,
    Members,
    Exports,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    SymbolRow,
    BeginMembers,
    MemberRow,
    BeginExports,
    BeginSummary,
    ExportRow,
    EndExports,
    Ignored,
}

/// Decides what one line is under the current state. Skip counts for the
/// block-structured rows are applied by the session, not re-classified.
pub fn classify(state: ParseState, line: &str) -> LineClass {
    match state {
        ParseState::Symbols => {
            if line.is_empty() {
                LineClass::BeginMembers
            } else {
                LineClass::SymbolRow
            }
        }
        ParseState::Members => {
            if line == EXPORTS_HEADER {
                LineClass::BeginExports
            } else if line == SUMMARY_HEADER {
                LineClass::BeginSummary
            } else {
                LineClass::MemberRow
            }
        }
        ParseState::Exports => {
            if line.is_empty() {
                LineClass::EndExports
            } else {
                LineClass::ExportRow
            }
        }
        ParseState::Done => LineClass::Ignored,
    }
}
