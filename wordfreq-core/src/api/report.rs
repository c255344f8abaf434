//! Report model handed to renderers

use crate::domain::{FrequencyTable, WordOrder};

/// One row of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// The word as found in the input
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Ordered word/count pairs ready for rendering
///
/// Every distinct word of the table it was built from appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    source: String,
    order: WordOrder,
    entries: Vec<ReportEntry>,
}

impl ReportModel {
    /// Build a report from a frozen table
    pub fn from_table(table: &FrequencyTable, order: WordOrder, source: impl Into<String>) -> Self {
        let entries = order
            .apply(table)
            .into_iter()
            .map(|word| ReportEntry {
                word: word.to_owned(),
                count: table.count_of(word),
            })
            .collect();

        Self {
            source: source.into(),
            order,
            entries,
        }
    }

    /// Label of the input the counts came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Order the entries are in
    pub fn order(&self) -> WordOrder {
        self.order
    }

    /// Entries in report order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Iterate over entries in report order
    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    /// Number of distinct words
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts
    pub fn total_words(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Check if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReportModel {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
