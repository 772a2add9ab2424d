// Mon Aug 24 2026 - Alex

pub mod group;
pub mod table;

pub use group::SymbolGroup;
pub use table::SymbolTable;
