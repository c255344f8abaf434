//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordfreq_core::ReportModel;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Emit anything that precedes the rows (headers, table openings)
    fn begin(&mut self, report: &ReportModel) -> Result<()> {
        let _ = report;
        Ok(())
    }

    /// Format and output a single word row
    fn format_entry(&mut self, word: &str, count: usize) -> Result<()>;

    /// Finalize output (e.g., close the table) and flush
    fn finish(&mut self, report: &ReportModel) -> Result<()>;

    /// Render a whole report
    fn write_report(&mut self, report: &ReportModel) -> Result<()> {
        self.begin(report)?;
        for entry in report {
            self.format_entry(&entry.word, entry.count)?;
        }
        self.finish(report)
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML page with a Words/Counts table
    #[default]
    Html,
    /// Plain text, one `word<TAB>count` line per word
    Text,
    /// Markdown table
    Markdown,
    /// JSON document with totals and entries
    Json,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Html,
        OutputFormat::Text,
        OutputFormat::Markdown,
        OutputFormat::Json,
    ];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML page with a Words/Counts table",
            OutputFormat::Text => "one word<TAB>count line per word",
            OutputFormat::Markdown => "Markdown table with a totals footer",
            OutputFormat::Json => "JSON document with totals and entries",
        }
    }
}

/// Create the formatter for `format` writing into `writer`
pub fn create_formatter<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
