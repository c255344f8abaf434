//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordfreq_core::ReportModel;

/// JSON formatter - collects rows and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for one JSON row
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// The word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Data structure for the JSON document
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// Input the counts came from
    pub source: String,
    /// Order of `entries`
    pub order: String,
    /// Sum of all counts
    pub total_words: usize,
    /// Number of entries
    pub distinct_words: usize,
    /// Rows in report order
    pub entries: Vec<EntryData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, count: usize) -> Result<()> {
        self.entries.push(EntryData {
            word: word.to_string(),
            count,
        });
        Ok(())
    }

    fn finish(&mut self, report: &ReportModel) -> Result<()> {
        let data = ReportData {
            source: report.source().to_string(),
            order: report.order().to_string(),
            total_words: report.total_words(),
            distinct_words: report.distinct_words(),
            entries: std::mem::take(&mut self.entries),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
