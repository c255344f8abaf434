//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordfreq_core::ReportModel;

/// Plain text formatter - outputs one `word<TAB>count` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, word: &str, count: usize) -> Result<()> {
        writeln!(self.writer, "{}\t{}", escape_field(word), count)?;
        Ok(())
    }

    fn finish(&mut self, _report: &ReportModel) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape the characters that would break a `word<TAB>count` row
fn escape_field(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_report, SharedBuffer};
    use std::io::Cursor;
    use wordfreq_core::{Config, Input, WordCounter, WordOrder};

    #[test]
    fn test_tab_separated_lines() {
        let report = sample_report("a A a", WordOrder::FirstSeen);
        let buffer = SharedBuffer::default();
        TextFormatter::new(buffer.clone()).write_report(&report).unwrap();

        assert_eq!(buffer.contents(), "a\t2\nA\t1\n");
    }

    #[test]
    fn test_control_characters_stay_on_one_row() {
        let config = Config::builder().separators(" ").build().unwrap();
        let report = WordCounter::with_config(config)
            .process(Input::from_named_reader("stdin", Cursor::new("end\nend\n")))
            .unwrap();
        let buffer = SharedBuffer::default();
        TextFormatter::new(buffer.clone()).write_report(&report).unwrap();

        assert_eq!(buffer.contents(), "end\\n\t2\n");
        assert_eq!(buffer.contents().lines().count(), 1);
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("a\tb"), "a\\tb");
        assert_eq!(escape_field("a\\n"), "a\\\\n");
        assert_ne!(escape_field("a\\n"), escape_field("a\n"));
    }
}
