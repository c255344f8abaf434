//! Input abstraction for word counting

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::api::Error;
use crate::domain::{FrequencyTable, SeparatorAlphabet};

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input, scanned as-is
    Text(String),
    /// File path input, scanned line by line
    File(PathBuf),
    /// Raw bytes input, must be UTF-8
    Bytes(Vec<u8>),
    /// Reader input, scanned line by line
    Reader {
        /// Label used in reports
        name: String,
        /// The stream itself
        reader: Box<dyn Read + Send>,
    },
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader { name, .. } => f
                .debug_struct("Input::Reader")
                .field("name", name)
                .finish(),
        }
    }
}

/// Totals gathered while scanning one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines read (zero for in-memory text)
    pub lines: usize,
    /// Word runs observed
    pub words: usize,
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self::from_named_reader("<stream>", reader)
    }

    /// Create input from reader with a label for reports
    pub fn from_named_reader(name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Input::Reader {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Human readable name of the source
    pub fn label(&self) -> String {
        match self {
            Input::Text(_) => "<text>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(_) => "<bytes>".to_string(),
            Input::Reader { name, .. } => name.clone(),
        }
    }

    /// Scan the whole input into `table`
    ///
    /// Files and readers are read line by line: each line loses its `\n` or
    /// `\r\n` terminator and gets a single `\n` back before it is segmented.
    /// The underlying handle is dropped on return, whether or not reading
    /// succeeded.
    pub(crate) fn scan_into(
        self,
        table: &mut FrequencyTable,
        separators: &SeparatorAlphabet,
    ) -> Result<ScanSummary, Error> {
        match self {
            Input::Text(text) => Ok(ScanSummary {
                lines: 0,
                words: table.observe_text(&text, separators),
            }),
            Input::Bytes(bytes) => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    Error::Infrastructure(format!("Invalid UTF-8 encoding: {}", e))
                })?;
                Ok(ScanSummary {
                    lines: 0,
                    words: table.observe_text(&text, separators),
                })
            }
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to open file {}: {}", path.display(), e))
                })?;
                scan_lines(BufReader::new(file), table, separators).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                })
            }
            Input::Reader { name, reader } => scan_lines(BufReader::new(reader), table, separators)
                .map_err(|e| Error::Infrastructure(format!("Failed to read from {}: {}", name, e))),
        }
    }
}

fn scan_lines<R: BufRead>(
    reader: R,
    table: &mut FrequencyTable,
    separators: &SeparatorAlphabet,
) -> std::io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for line in reader.lines() {
        let mut line = line?;
        line.push('\n');
        summary.lines += 1;
        summary.words += table.observe_text(&line, separators);
    }

    Ok(summary)
}
