// Wed Aug 26 2026 - Alex

use crate::output::TableOutput;
use itertools::Itertools;
use std::fmt::Write;

/// Plain-text rendering of a finished table for eyeballing a single module.
pub struct ReportGenerator {
    include_failures: bool,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            include_failures: true,
        }
    }

    pub fn with_failures(mut self, include: bool) -> Self {
        self.include_failures = include;
        self
    }

    pub fn render(&self, table: &TableOutput) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} [{}]: {} groups, {} names",
            table.module, table.arch, table.symbol_count, table.name_count
        );
        let _ = writeln!(
            out,
            "{:>5} {:>10} {:>7}  {:<28} {}",
            "seq", "offset", "ordinal", "owner", "names"
        );
        for group in &table.groups {
            let ordinal = group
                .ordinal
                .map(|o| o.to_string())
                .unwrap_or_else(|| "-".to_string());
            let owner = group.owner.as_deref().unwrap_or("-");
            let names = group.names.iter().join(", ");
            let _ = writeln!(
                out,
                "{:>5} {:>10} {:>7}  {:<28} {}",
                group.index, group.offset, ordinal, owner, names
            );
        }
        if self.include_failures && !table.failures.is_empty() {
            let _ = writeln!(out, "{} resolution failures:", table.failures.len());
            for failure in &table.failures {
                let _ = writeln!(out, "  [{}] line {}: {}", failure.phase, failure.line, failure.raw);
            }
        }
        out
    }

    pub fn render_all(&self, tables: &[TableOutput]) -> String {
        tables.iter().map(|table| self.render(table)).join("\n")
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
