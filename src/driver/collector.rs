// Wed Aug 26 2026 - Alex

use crate::driver::batch::ModuleReport;
use crate::driver::ArchOutcome;
use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub modules: usize,
    pub finished: usize,
    pub no_data: usize,
    pub aborted: usize,
    pub groups: usize,
    pub failures: usize,
}

/// Shared sink for module reports produced by parallel workers.
#[derive(Debug, Default)]
pub struct ReportCollector {
    reports: RwLock<Vec<ModuleReport>>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }

    pub fn push(&self, report: ModuleReport) {
        self.reports.write().push(report);
    }

    pub fn len(&self) -> usize {
        self.reports.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.read().is_empty()
    }

    pub fn summary(&self) -> BatchSummary {
        let reports = self.reports.read();
        let mut summary = BatchSummary {
            modules: reports.len(),
            ..BatchSummary::default()
        };
        for report in reports.iter() {
            for (_, outcome) in &report.outcomes {
                match outcome {
                    ArchOutcome::Finished(parse) => {
                        summary.finished += 1;
                        summary.groups += parse.table.len();
                        summary.failures += parse.failures.len();
                    }
                    ArchOutcome::NoData => summary.no_data += 1,
                    ArchOutcome::Aborted(_) => summary.aborted += 1,
                }
            }
        }
        summary
    }

    pub fn into_reports(self) -> Vec<ModuleReport> {
        self.reports.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::driver::batch::{parse_modules_into, ModuleDump};
    use crate::dump::Arch;
    use crate::parser::state::PREAMBLE_LINES;

    fn dump_with_preamble(content: &[&str]) -> Vec<String> {
        let mut lines = vec![String::new(); PREAMBLE_LINES];
        lines.extend(content.iter().map(|s| s.to_string()));
        lines
    }

    #[test]
    fn test_collector_aggregates_parallel_batch() {
        let config = ParserConfig::new()
            .with_architectures(vec![Arch::X86, Arch::X64])
            .with_max_threads(2);
        let modules = vec![
            ModuleDump::new("one").with_dump(
                Arch::X86,
                dump_with_preamble(&["      1 a", "      1 b", "      2 c", "", "  Summary"]),
            ),
            ModuleDump::new("two").with_dump(
                Arch::X86,
                dump_with_preamble(&["      9 z", "", "  Summary"]),
            ),
        ];
        let collector = ReportCollector::new();
        parse_modules_into(&config, &modules, &collector);

        let summary = collector.summary();
        assert_eq!(summary.modules, 2);
        assert_eq!(summary.finished, 2);
        // Neither module captured an x64 dump.
        assert_eq!(summary.no_data, 2);
        assert_eq!(summary.aborted, 0);
        assert_eq!(summary.groups, 3);
        assert_eq!(summary.failures, 0);
    }
}
