// Mon Aug 24 2026 - Alex

use crate::parser::error::{FailureKind, ParseError, ParsePhase, ResolutionFailure};
use crate::parser::state::MEMBER_PREFIX;
use crate::symbol::SymbolTable;

const OBJECT_SUFFIX: &str = ".obj";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub offset: u64,
    pub object_name: String,
}

/// Parses `Archive member name at <hex-offset>: <descriptor>`.
///
/// Anonymous linker members (`/2799   api-ms-....dll`) carry the real name
/// as the second token. Direct members are the name itself, with at most a
/// trailing `/`; internal whitespace there violates the format.
pub fn parse_member_row(line_no: usize, line: &str) -> Result<MemberRow, ParseError> {
    let malformed = || ParseError::MalformedMemberRow {
        line: line_no,
        text: line.to_string(),
    };
    let rest = line.strip_prefix(MEMBER_PREFIX).ok_or_else(malformed)?;
    let (offset_part, descriptor) = rest.trim().split_once(": ").ok_or_else(malformed)?;
    let offset_token = offset_part.trim();
    let offset = u64::from_str_radix(offset_token, 16).map_err(|_| ParseError::InvalidOffset {
        line: line_no,
        token: offset_token.to_string(),
    })?;

    let descriptor = descriptor.trim();
    let object_name = if descriptor.starts_with('/') {
        descriptor
            .split_whitespace()
            .nth(1)
            .ok_or_else(malformed)?
            .to_string()
    } else {
        if descriptor.contains(char::is_whitespace) {
            return Err(ParseError::MemberNameWhitespace {
                line: line_no,
                name: descriptor.to_string(),
            });
        }
        descriptor.strip_suffix('/').unwrap_or(descriptor).to_string()
    };

    Ok(MemberRow { offset, object_name })
}

/// Attaches the owning object/DLL to the symbol group at the row's offset.
/// An unmatched offset is benign for `.obj` members (object-only archive
/// members export nothing) and a recorded resolution failure otherwise.
pub fn resolve_member_row(
    table: &mut SymbolTable,
    failures: &mut Vec<ResolutionFailure>,
    line_no: usize,
    line: &str,
) -> Result<(), ParseError> {
    let row = parse_member_row(line_no, line)?;
    log::debug!("member: {:x} {}", row.offset, row.object_name);
    match table.index_by_offset(row.offset) {
        Some(index) => table.set_owner(index, &row.object_name),
        None => {
            if row.object_name.to_ascii_lowercase().ends_with(OBJECT_SUFFIX) {
                log::debug!("member {} defines no public symbol", row.object_name);
            } else {
                log::warn!(
                    "no symbol group at offset {:x} for member {}",
                    row.offset,
                    row.object_name
                );
                failures.push(ResolutionFailure {
                    phase: ParsePhase::Members,
                    line: line_no,
                    raw: line.to_string(),
                    kind: FailureKind::OffsetNotFound {
                        offset: format!("{:x}", row.offset),
                    },
                });
            }
        }
    }
    Ok(())
}
