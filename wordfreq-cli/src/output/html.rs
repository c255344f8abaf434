//! HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordfreq_core::ReportModel;

/// HTML formatter - outputs a page with one table row per word
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for HtmlFormatter<W> {
    fn begin(&mut self, report: &ReportModel) -> Result<()> {
        let title = format!("Words Counted in {}", escape_html(report.source()));

        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<title>{title}</title>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, "<h2>{title}</h2>")?;
        writeln!(self.writer, "<hr />")?;
        writeln!(self.writer, "<table border=\"1\">")?;
        writeln!(self.writer, "<tr>")?;
        writeln!(self.writer, "<th>Words</th>")?;
        writeln!(self.writer, "<th>Counts</th>")?;
        writeln!(self.writer, "</tr>")?;
        Ok(())
    }

    fn format_entry(&mut self, word: &str, count: usize) -> Result<()> {
        writeln!(self.writer, "<tr>")?;
        writeln!(self.writer, "<td>{}</td>", escape_html(word))?;
        writeln!(self.writer, "<td>{count}</td>")?;
        writeln!(self.writer, "</tr>")?;
        Ok(())
    }

    fn finish(&mut self, _report: &ReportModel) -> Result<()> {
        writeln!(self.writer, "</table>")?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape the characters that would otherwise be read as markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
