// Wed Aug 26 2026 - Alex

pub mod json;
pub mod report;

pub use json::{JsonError, JsonWriter};
pub use report::ReportGenerator;

use crate::dump::Arch;
use crate::parser::{ParseReport, ResolutionFailure};
use crate::symbol::SymbolGroup;
use serde::Serialize;

/// Consumer-facing view of one finished architecture table.
#[derive(Debug, Clone, Serialize)]
pub struct TableOutput {
    pub module: String,
    pub arch: Arch,
    pub symbol_count: usize,
    pub name_count: usize,
    pub groups: Vec<GroupOutput>,
    pub failures: Vec<ResolutionFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupOutput {
    pub index: usize,
    pub offset: String,
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_raw_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
}

impl From<&SymbolGroup> for GroupOutput {
    fn from(group: &SymbolGroup) -> Self {
        Self {
            index: group.sequence_index,
            offset: group.hex_offset(),
            names: group.names.clone(),
            owner: group.owner_name.clone(),
            export_name: group.export_name.clone(),
            export_raw_name: group.export_raw_name.clone(),
            ordinal: group.ordinal,
        }
    }
}

impl TableOutput {
    pub fn from_report(module: impl Into<String>, arch: Arch, report: &ParseReport) -> Self {
        Self {
            module: module.into(),
            arch,
            symbol_count: report.table.len(),
            name_count: report.table.name_count(),
            groups: report.table.groups().iter().map(GroupOutput::from).collect(),
            failures: report.failures.clone(),
        }
    }
}
