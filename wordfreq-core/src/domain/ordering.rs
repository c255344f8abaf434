//! Report ordering of distinct words

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::frequency::FrequencyTable;

/// Order in which distinct words are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
    /// Order of first appearance in the input
    #[default]
    FirstSeen,
    /// Case-insensitive lexicographic order, ties kept in first-seen order
    #[serde(alias = "sorted")]
    Alphabetical,
}

/// Error returned when parsing an unknown ordering name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown word order '{0}' (expected 'first-seen' or 'alphabetical')")]
pub struct ParseWordOrderError(pub String);

impl WordOrder {
    /// All supported orderings
    pub const ALL: [WordOrder; 2] = [WordOrder::FirstSeen, WordOrder::Alphabetical];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            WordOrder::FirstSeen => "first-seen",
            WordOrder::Alphabetical => "alphabetical",
        }
    }

    /// Distinct words of `table` in this order
    ///
    /// The table itself is left untouched.
    pub fn apply<'t>(&self, table: &'t FrequencyTable) -> Vec<&'t str> {
        match self {
            WordOrder::FirstSeen => table.distinct_words().collect(),
            WordOrder::Alphabetical => sorted_view(table.distinct_words()),
        }
    }
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordOrder {
    type Err = ParseWordOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-seen" | "first_seen" | "firstseen" | "input" => Ok(WordOrder::FirstSeen),
            "alphabetical" | "sorted" | "alpha" => Ok(WordOrder::Alphabetical),
            _ => Err(ParseWordOrderError(s.to_string())),
        }
    }
}

/// Compare two words with letter case ignored
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort words case-insensitively into a new vector
///
/// The sort is stable: words that compare equal once case is folded keep
/// the relative order they had in `words`.
pub fn sorted_view<'a, I>(words: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&'a str> = words.into_iter().collect();
    sorted.sort_by(|a, b| compare_ignore_case(a, b));
    sorted
}
