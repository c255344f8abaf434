//! Pure word counting logic
//!
//! Nothing in this module performs I/O. The segmenter splits text into
//! maximal runs, the frequency table counts word runs in first-seen order,
//! and the ordering policy derives the reported order from the table.

pub mod frequency;
pub mod ordering;
pub mod segmenter;
pub mod separators;

pub use frequency::{FrequencyTable, WordCount};
pub use ordering::{compare_ignore_case, sorted_view, ParseWordOrderError, WordOrder};
pub use segmenter::{next_run, runs, words, Run, RunKind, Runs};
pub use separators::SeparatorAlphabet;
