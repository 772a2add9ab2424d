// Wed Aug 26 2026 - Alex

use crate::output::TableOutput;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn serialize(&self, tables: &[TableOutput]) -> Result<String, JsonError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(tables)?
        } else {
            serde_json::to_string(tables)?
        };
        Ok(json)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        tables: &[TableOutput],
        path: P,
    ) -> Result<(), JsonError> {
        let json = self.serialize(tables)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
