// Mon Aug 24 2026 - Alex

use crate::parser::error::ParseError;
use crate::symbol::SymbolTable;

/// Applies one public-symbol row (`<hex-offset> <name>`) to the table.
/// Anything other than exactly two tokens is fatal: offsets drive all later
/// resolution, so a skipped row would corrupt the member and export phases.
pub fn apply_symbol_row(
    table: &mut SymbolTable,
    line_no: usize,
    line: &str,
) -> Result<(), ParseError> {
    let mut tokens = line.split_whitespace();
    let (offset_token, name) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(offset), Some(name), None) => (offset, name),
        _ => {
            return Err(ParseError::MalformedSymbolRow {
                line: line_no,
                text: line.to_string(),
            })
        }
    };
    let offset = u64::from_str_radix(offset_token, 16).map_err(|_| ParseError::InvalidOffset {
        line: line_no,
        token: offset_token.to_string(),
    })?;
    table.insert_symbol(offset, name);
    log::debug!("symbol: {} {}", offset_token, name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_with_same_offset_accumulate_names_in_order() {
        let mut table = SymbolTable::new();
        apply_symbol_row(&mut table, 0, "      6D2 _SetupColorMatchingA@4").unwrap();
        apply_symbol_row(&mut table, 1, "      6D2 __imp__SetupColorMatchingA@4").unwrap();

        let group = table.group_by_offset(0x6d2).unwrap();
        assert_eq!(
            group.names,
            vec!["_SetupColorMatchingA@4", "__imp__SetupColorMatchingA@4"]
        );
        assert!(table.group_by_name("_SetupColorMatchingA@4").is_some());
        assert!(table.group_by_name("__imp__SetupColorMatchingA@4").is_some());
    }

    #[test]
    fn test_offset_key_is_case_insensitive() {
        let mut table = SymbolTable::new();
        apply_symbol_row(&mut table, 0, "      22E first").unwrap();
        apply_symbol_row(&mut table, 1, "      22e second").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.group_by_offset(0x22e).unwrap().names.len(), 2);
    }

    #[test]
    fn test_sequence_indices_count_distinct_offsets() {
        let mut table = SymbolTable::new();
        apply_symbol_row(&mut table, 0, "      22E a").unwrap();
        apply_symbol_row(&mut table, 1, "      450 b").unwrap();
        apply_symbol_row(&mut table, 2, "      22E c").unwrap();
        apply_symbol_row(&mut table, 3, "      584 d").unwrap();

        assert_eq!(table.group_by_offset(0x22e).unwrap().sequence_index, 1);
        assert_eq!(table.group_by_offset(0x450).unwrap().sequence_index, 2);
        assert_eq!(table.group_by_offset(0x584).unwrap().sequence_index, 3);
    }

    #[test]
    fn test_row_without_name_is_fatal() {
        let mut table = SymbolTable::new();
        let err = apply_symbol_row(&mut table, 4, "      22E").unwrap_err();
        assert!(matches!(err, ParseError::MalformedSymbolRow { line: 4, .. }));
    }

    #[test]
    fn test_row_with_extra_token_is_fatal() {
        let mut table = SymbolTable::new();
        let err = apply_symbol_row(&mut table, 2, "      22E name extra").unwrap_err();
        assert!(matches!(err, ParseError::MalformedSymbolRow { .. }));
    }

    #[test]
    fn test_non_hex_offset_is_fatal() {
        let mut table = SymbolTable::new();
        let err = apply_symbol_row(&mut table, 0, "      XYZ name").unwrap_err();
        assert!(matches!(err, ParseError::InvalidOffset { .. }));
    }
}
