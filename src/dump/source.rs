// Mon Aug 24 2026 - Alex

use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One dumper report split into lines. The dumper emits Latin-1 text with
/// CRLF terminators; both are normalized here so the parser sees plain
/// per-line strings.
#[derive(Debug, Clone)]
pub struct DumpSource {
    lines: Vec<String>,
    path: Option<PathBuf>,
}

impl DumpSource {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DumpError> {
        let file = File::open(path.as_ref())?;
        let mmap = unsafe { Mmap::map(&file)? };
        let text = decode_latin1(&mmap);
        Ok(Self {
            lines: split_lines(&text),
            path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// For callers that captured the dumper's stdout themselves.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            path: None,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    // Latin-1 maps byte values directly onto the first 256 code points.
    bytes.iter().map(|&b| b as char).collect()
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
