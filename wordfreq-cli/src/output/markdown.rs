//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordfreq_core::ReportModel;

/// Markdown formatter - outputs the counts as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin(&mut self, report: &ReportModel) -> Result<()> {
        writeln!(self.writer, "## Words Counted in {}", report.source())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Words | Counts |")?;
        writeln!(self.writer, "|-------|-------:|")?;
        Ok(())
    }

    fn format_entry(&mut self, word: &str, count: usize) -> Result<()> {
        writeln!(self.writer, "| {} | {} |", escape_cell(word), count)?;
        Ok(())
    }

    fn finish(&mut self, report: &ReportModel) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, distinct words: {}*",
            report.total_words(),
            report.distinct_words()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

// Pipes would split the cell and raw newlines would end the row.
fn escape_cell(word: &str) -> String {
    word.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_report, SharedBuffer};
    use wordfreq_core::WordOrder;

    #[test]
    fn test_table_and_footer() {
        let report = sample_report("x y x", WordOrder::FirstSeen);
        let buffer = SharedBuffer::default();
        MarkdownFormatter::new(buffer.clone()).write_report(&report).unwrap();
        let markdown = buffer.contents();

        assert!(markdown.contains("| Words | Counts |"));
        assert!(markdown.contains("| x | 2 |\n| y | 1 |"));
        assert!(markdown.contains("*Total words: 3, distinct words: 2*"));
    }

    #[test]
    fn test_cell_escaping() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("a\\n"), "a\\\\n");
        assert_ne!(escape_cell("a\\n"), escape_cell("a\n"));
    }
}
