// Wed Aug 26 2026 - Alex

pub mod batch;
pub mod collector;

pub use batch::{parse_module, parse_modules, parse_modules_into, ModuleDump, ModuleReport};
pub use collector::{BatchSummary, ReportCollector};

use crate::dump::Arch;
use crate::parser::state::PREAMBLE_LINES;
use crate::parser::{ParseError, ParseReport, ParseSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    Running,
    Finished,
    Aborted,
}

/// Result of one architecture's parse attempt.
#[derive(Debug)]
pub enum ArchOutcome {
    /// Table plus any non-fatal resolution failures.
    Finished(ParseReport),
    /// Fatal malformed row; no partial table is returned.
    Aborted(ParseError),
    /// Dump absent or shorter than the fixed preamble; skip this
    /// architecture. Not an error.
    NoData,
}

impl ArchOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, ArchOutcome::Finished(_))
    }

    pub fn report(&self) -> Option<&ParseReport> {
        match self {
            ArchOutcome::Finished(report) => Some(report),
            _ => None,
        }
    }
}

/// Runs the three-phase parse for one architecture in isolation. Each
/// architecture gets a fresh driver; nothing is shared between them.
pub struct ArchDriver {
    arch: Arch,
    state: DriverState,
}

impl ArchDriver {
    pub fn new(arch: Arch) -> Self {
        Self {
            arch,
            state: DriverState::NotStarted,
        }
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// `lines` is the full dump text for this architecture, preamble
    /// included; the driver strips the fixed preamble itself.
    pub fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> ArchOutcome {
        self.state = DriverState::Running;
        if lines.len() <= PREAMBLE_LINES {
            log::info!("{}: no dump data ({} lines)", self.arch, lines.len());
            self.state = DriverState::Aborted;
            return ArchOutcome::NoData;
        }
        let session = ParseSession::with_line_offset(PREAMBLE_LINES);
        match session.run(&lines[PREAMBLE_LINES..]) {
            Ok(report) => {
                log::info!(
                    "{}: {} symbol groups, {} resolution failures",
                    self.arch,
                    report.table.len(),
                    report.failures.len()
                );
                self.state = DriverState::Finished;
                ArchOutcome::Finished(report)
            }
            Err(err) => {
                log::error!("{}: parse aborted: {}", self.arch, err);
                self.state = DriverState::Aborted;
                ArchOutcome::Aborted(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::state::PREAMBLE_LINES;

    fn with_preamble(content: &[&str]) -> Vec<String> {
        let mut lines = vec![String::new(); PREAMBLE_LINES];
        lines.extend(content.iter().map(|s| s.to_string()));
        lines
    }

    #[test]
    fn test_empty_input_is_no_data_not_an_abort() {
        let mut driver = ArchDriver::new(Arch::X86);
        let outcome = driver.run::<&str>(&[]);
        assert!(matches!(outcome, ArchOutcome::NoData));
        assert_eq!(driver.state(), DriverState::Aborted);
    }

    #[test]
    fn test_truncated_input_is_no_data() {
        let mut driver = ArchDriver::new(Arch::X64);
        let lines = vec![String::from("banner"); PREAMBLE_LINES];
        assert!(matches!(driver.run(&lines), ArchOutcome::NoData));
    }

    #[test]
    fn test_happy_path_skips_preamble_and_finishes() {
        let lines = with_preamble(&["      22E some_symbol", "", "  Summary"]);
        let mut driver = ArchDriver::new(Arch::X86);
        let outcome = driver.run(&lines);
        assert_eq!(driver.state(), DriverState::Finished);
        let report = outcome.report().unwrap();
        assert_eq!(report.table.len(), 1);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_malformed_row_aborts_with_no_partial_table() {
        let lines = with_preamble(&["      22E sym", "", "Archive member name at 22E: BAD NAME"]);
        let mut driver = ArchDriver::new(Arch::X86);
        match driver.run(&lines) {
            ArchOutcome::Aborted(ParseError::MemberNameWhitespace { line, .. }) => {
                // Diagnostics carry absolute positions in the dump file.
                assert_eq!(line, PREAMBLE_LINES + 2);
            }
            other => panic!("expected abort, got {:?}", other),
        }
        assert_eq!(driver.state(), DriverState::Aborted);
    }
}
