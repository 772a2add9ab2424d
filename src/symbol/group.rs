// Mon Aug 24 2026 - Alex

use serde::{Deserialize, Serialize};

/// One link-time offset and every symbol name aliased to it, enriched with
/// the owning archive member and export data as the later phases resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGroup {
    pub sequence_index: usize,
    pub offset: u64,
    pub names: Vec<String>,
    pub owner_name: Option<String>,
    pub export_name: Option<String>,
    pub export_raw_name: Option<String>,
    pub ordinal: Option<u32>,
}

impl SymbolGroup {
    pub fn new(sequence_index: usize, offset: u64, name: String) -> Self {
        Self {
            sequence_index,
            offset,
            names: vec![name],
            owner_name: None,
            export_name: None,
            export_raw_name: None,
            ordinal: None,
        }
    }

    /// First name encountered in the symbol-table section.
    pub fn primary_name(&self) -> &str {
        &self.names[0]
    }

    pub fn hex_offset(&self) -> String {
        format!("{:x}", self.offset)
    }

    pub fn is_owned(&self) -> bool {
        self.owner_name.is_some()
    }

    pub fn is_exported(&self) -> bool {
        self.export_name.is_some()
    }
}
