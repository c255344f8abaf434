//! Word segmentation and frequency counting
//!
//! Text is split into maximal runs of separator and non-separator
//! characters. Non-separator runs are words; they are counted exactly as
//! found (case-sensitively) in a table that remembers the order in which
//! each distinct word first appeared. Reports list the words either in that
//! first-seen order or alphabetically with case ignored.
//!
//! # Architecture
//!
//! - **Domain layer**: separator alphabet, run segmenter, frequency table and
//!   ordering policy. Pure, no I/O.
//! - **API layer**: configuration, input sources, the counter that drives a
//!   scan, and the report model consumed by renderers.
//!
//! # Example
//!
//! ```rust
//! use wordfreq_core::{Config, Input, WordCounter, WordOrder};
//!
//! let config = Config::builder()
//!     .separators(" .")
//!     .order(WordOrder::Alphabetical)
//!     .build()
//!     .unwrap();
//! let counter = WordCounter::with_config(config);
//!
//! let report = counter.process(Input::from_text("b a. B a.")).unwrap();
//! let words: Vec<&str> = report.iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, vec!["a", "b", "B"]);
//! ```

pub mod api;
pub mod domain;

pub use api::{
    defaults, parse_escaped, Config, ConfigBuilder, Error, Input, ReportEntry, ReportModel,
    Result, ScanSummary, WordCounter,
};
pub use domain::{FrequencyTable, SeparatorAlphabet, WordOrder};

/// Count `text` with the default configuration and report in first-seen order
pub fn count_words(text: &str) -> ReportModel {
    let counter = WordCounter::new();
    let mut table = FrequencyTable::new();
    table.observe_text(text, counter.config().separators());
    counter.report(&table, "<text>")
}
