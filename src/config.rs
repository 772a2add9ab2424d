// Mon Aug 24 2026 - Alex

use crate::dump::Arch;
use serde::{Deserialize, Serialize};

/// Runtime knobs for a parse batch. The dump format itself (preamble length,
/// metadata block sizes, section header literals) is deliberately not
/// configurable: format drift across dumper versions is a failure mode, not
/// a supported variation axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub architectures: Vec<Arch>,
    pub max_threads: usize,
    pub pretty_output: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            architectures: Arch::ALL.to_vec(),
            max_threads: num_cpus::get(),
            pretty_output: true,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_architectures(mut self, architectures: Vec<Arch>) -> Self {
        self.architectures = architectures;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    pub fn with_pretty_output(mut self, pretty: bool) -> Self {
        self.pretty_output = pretty;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.architectures.is_empty() {
            return Err("at least one architecture must be selected".to_string());
        }
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        Ok(())
    }
}
