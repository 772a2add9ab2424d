// Wed Aug 26 2026 - Alex

use crate::config::ParserConfig;
use crate::driver::collector::ReportCollector;
use crate::driver::{ArchDriver, ArchOutcome};
use crate::dump::Arch;
use rayon::prelude::*;
use std::collections::HashMap;

/// All dumps captured for one library module, keyed by architecture.
#[derive(Debug, Clone, Default)]
pub struct ModuleDump {
    pub name: String,
    pub dumps: HashMap<Arch, Vec<String>>,
}

impl ModuleDump {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dumps: HashMap::new(),
        }
    }

    pub fn with_dump(mut self, arch: Arch, lines: Vec<String>) -> Self {
        self.dumps.insert(arch, lines);
        self
    }
}

#[derive(Debug)]
pub struct ModuleReport {
    pub name: String,
    pub outcomes: Vec<(Arch, ArchOutcome)>,
}

impl ModuleReport {
    pub fn outcome(&self, arch: Arch) -> Option<&ArchOutcome> {
        self.outcomes
            .iter()
            .find(|(a, _)| *a == arch)
            .map(|(_, outcome)| outcome)
    }

    pub fn has_aborts(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, outcome)| matches!(outcome, ArchOutcome::Aborted(_)))
    }
}

/// Parses every configured architecture of one module. Architectures share
/// no mutable state, so they fan out on the rayon pool; an architecture with
/// no captured dump reports NoData.
pub fn parse_module(config: &ParserConfig, module: &ModuleDump) -> ModuleReport {
    let outcomes = config
        .architectures
        .par_iter()
        .map(|&arch| {
            let mut driver = ArchDriver::new(arch);
            let outcome = match module.dumps.get(&arch) {
                Some(lines) => driver.run(lines),
                None => ArchOutcome::NoData,
            };
            (arch, outcome)
        })
        .collect();
    ModuleReport {
        name: module.name.clone(),
        outcomes,
    }
}

/// Parses a set of modules on a pool sized by the config. Falls back to the
/// global pool when a dedicated one cannot be built.
pub fn parse_modules(config: &ParserConfig, modules: &[ModuleDump]) -> Vec<ModuleReport> {
    let run = || {
        modules
            .par_iter()
            .map(|module| parse_module(config, module))
            .collect()
    };
    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads)
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(err) => {
            log::warn!("falling back to the global rayon pool: {}", err);
            run()
        }
    }
}

/// Like `parse_modules`, but streams each finished report into a shared
/// collector as workers complete.
pub fn parse_modules_into(
    config: &ParserConfig,
    modules: &[ModuleDump],
    collector: &ReportCollector,
) {
    let run = || {
        modules
            .par_iter()
            .for_each(|module| collector.push(parse_module(config, module)));
    };
    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads)
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(err) => {
            log::warn!("falling back to the global rayon pool: {}", err);
            run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::state::PREAMBLE_LINES;

    fn dump_with_preamble(content: &[&str]) -> Vec<String> {
        let mut lines = vec![String::new(); PREAMBLE_LINES];
        lines.extend(content.iter().map(|s| s.to_string()));
        lines
    }

    fn config_for(archs: &[Arch]) -> ParserConfig {
        ParserConfig::new()
            .with_architectures(archs.to_vec())
            .with_max_threads(2)
    }

    #[test]
    fn test_parse_module_covers_each_configured_arch() {
        let module = ModuleDump::new("icmui")
            .with_dump(
                Arch::X86,
                dump_with_preamble(&["      22E sym_x86", "", "  Summary"]),
            )
            .with_dump(
                Arch::X64,
                dump_with_preamble(&["      450 sym_x64", "", "  Summary"]),
            );
        let report = parse_module(&config_for(&[Arch::X86, Arch::X64, Arch::Arm64]), &module);

        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcome(Arch::X86).unwrap().is_finished());
        assert!(report.outcome(Arch::X64).unwrap().is_finished());
        assert!(matches!(report.outcome(Arch::Arm64), Some(ArchOutcome::NoData)));
        assert!(!report.has_aborts());
    }

    #[test]
    fn test_architectures_are_isolated() {
        let module = ModuleDump::new("mixed")
            .with_dump(
                Arch::X86,
                dump_with_preamble(&["      100 good", "", "  Summary"]),
            )
            .with_dump(Arch::X64, dump_with_preamble(&["not a symbol row at all"]));
        let report = parse_module(&config_for(&[Arch::X86, Arch::X64]), &module);

        assert!(report.outcome(Arch::X86).unwrap().is_finished());
        assert!(matches!(
            report.outcome(Arch::X64),
            Some(ArchOutcome::Aborted(_))
        ));
        assert!(report.has_aborts());
    }

    #[test]
    fn test_parse_modules_returns_one_report_per_module() {
        let modules = vec![
            ModuleDump::new("a").with_dump(
                Arch::X86,
                dump_with_preamble(&["      1 sym_a", "", "  Summary"]),
            ),
            ModuleDump::new("b").with_dump(
                Arch::X86,
                dump_with_preamble(&["      2 sym_b", "", "  Summary"]),
            ),
        ];
        let reports = parse_modules(&config_for(&[Arch::X86]), &modules);
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| !r.has_aborts()));
    }
}
