//! Public API for wordfreq-core
//!
//! This module wires the pure domain types to real inputs: it reads files,
//! readers or in-memory text, feeds them through the segmenter into a
//! frequency table, and turns the table into a report.

mod config;
mod counter;
mod error;
mod input;
mod report;


pub use config::{defaults, parse_escaped, Config, ConfigBuilder};
pub use counter::WordCounter;
pub use error::{Error, Result};
pub use input::{Input, ScanSummary};
pub use report::{ReportEntry, ReportModel};
