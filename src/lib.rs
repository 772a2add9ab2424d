// Mon Aug 24 2026 - Alex

pub mod config;
pub mod driver;
pub mod dump;
pub mod output;
pub mod parser;
pub mod symbol;

pub use config::ParserConfig;
pub use driver::{ArchDriver, ArchOutcome, DriverState, ModuleDump, ModuleReport, ReportCollector};
pub use dump::{Arch, DumpSource};
pub use output::{JsonWriter, ReportGenerator, TableOutput};
pub use parser::{ParseError, ParseReport, ParseSession, ResolutionFailure};
pub use symbol::{SymbolGroup, SymbolTable};
