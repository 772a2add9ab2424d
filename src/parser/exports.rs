// Mon Aug 24 2026 - Alex

use crate::parser::error::{FailureKind, ParseError, ParsePhase, ResolutionFailure};
use crate::parser::state::CONTINUATION_INDENT;
use crate::symbol::SymbolTable;

pub const IMPORT_THUNK_PREFIX: &str = "__imp_";

/// Gap between the ordinal column and the name column in primary rows.
const ORDINAL_GAP: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub ordinal: Option<u32>,
    pub name: String,
}

/// Parses one export-table row. Continuation rows sit fully inside the
/// ordinal column's indent and carry no ordinal; primary rows are
/// `<ordinal>    <name-with-detail>`. Trailing hints (forwarder or pointer
/// text) after the name are discarded.
pub fn parse_export_row(line_no: usize, line: &str) -> Result<ExportRow, ParseError> {
    let malformed = || ParseError::MalformedExportRow {
        line: line_no,
        text: line.to_string(),
    };
    let (ordinal, detail) = if line.starts_with(CONTINUATION_INDENT) {
        (None, line.trim())
    } else {
        let (ordinal_token, rest) = line.trim().split_once(ORDINAL_GAP).ok_or_else(malformed)?;
        let ordinal_token = ordinal_token.trim();
        let ordinal = ordinal_token
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidOrdinal {
                line: line_no,
                token: ordinal_token.to_string(),
            })?;
        (Some(ordinal), rest.trim())
    };
    let name = detail.split_whitespace().next().ok_or_else(malformed)?;
    Ok(ExportRow {
        ordinal,
        name: name.to_string(),
    })
}

/// Resolves one export row against the name index: the exact name first,
/// else the `__imp_` thunk alias, never both. Ordinals are written only when
/// the row carries one, so continuation rows cannot clear an earlier value.
pub fn resolve_export_row(
    table: &mut SymbolTable,
    failures: &mut Vec<ResolutionFailure>,
    line_no: usize,
    line: &str,
) -> Result<(), ParseError> {
    let row = parse_export_row(line_no, line)?;
    log::debug!("export: {:?} {}", row.ordinal, row.name);

    let resolved = match table.index_by_name(&row.name) {
        Some(index) => Some((index, row.name.clone())),
        None => {
            let thunk = format!("{}{}", IMPORT_THUNK_PREFIX, row.name);
            table.index_by_name(&thunk).map(|index| (index, thunk))
        }
    };

    match resolved {
        Some((index, raw_name)) => {
            let group = table.group_mut(index);
            group.export_name = Some(row.name);
            group.export_raw_name = Some(raw_name);
            if let Some(ordinal) = row.ordinal {
                group.ordinal = Some(ordinal);
            }
        }
        None => {
            log::warn!("no symbol group named {} for export row", row.name);
            failures.push(ResolutionFailure {
                phase: ParsePhase::Exports,
                line: line_no,
                raw: line.to_string(),
                kind: FailureKind::NameNotFound { name: row.name },
            });
        }
    }
    Ok(())
}
