//! Main word counter implementation

use std::time::Instant;

use crate::api::{Config, Error, Input, ReportModel, ScanSummary};
use crate::domain::FrequencyTable;

/// Counts words of one or more inputs with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    config: Config,
}

impl WordCounter {
    /// Create a counter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Count the words of a single input into a fresh table
    ///
    /// No table is returned when the input cannot be read.
    pub fn count(&self, input: Input) -> Result<FrequencyTable, Error> {
        let mut table = FrequencyTable::new();
        self.count_into(input, &mut table)?;
        Ok(table)
    }

    /// Count the words of `input` into an existing table
    ///
    /// Words already in `table` keep their position, so first-seen order
    /// continues across successive inputs. `table` is left untouched when
    /// the input cannot be read to the end.
    pub fn count_into(&self, input: Input, table: &mut FrequencyTable) -> Result<ScanSummary, Error> {
        let label = input.label();
        let start = Instant::now();

        let mut scanned = FrequencyTable::new();
        let summary = input.scan_into(&mut scanned, &self.config.separators)?;
        table.merge(scanned);

        log::debug!(
            "scanned {}: {} lines, {} words, {} distinct so far ({:?})",
            label,
            summary.lines,
            summary.words,
            table.len(),
            start.elapsed()
        );
        Ok(summary)
    }

    /// Build a report from a table using the configured order
    pub fn report(&self, table: &FrequencyTable, source: impl Into<String>) -> ReportModel {
        ReportModel::from_table(table, self.config.order, source)
    }

    /// Count a single input and build its report
    pub fn process(&self, input: Input) -> Result<ReportModel, Error> {
        let source = input.label();
        let table = self.count(input)?;
        Ok(self.report(&table, source))
    }
}
