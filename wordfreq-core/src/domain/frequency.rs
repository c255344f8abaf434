//! Word frequency accumulation with first-seen ordering

use std::collections::HashMap;

use crate::domain::segmenter::words;
use crate::domain::separators::SeparatorAlphabet;

/// A distinct word and the number of times it was observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// The word exactly as found in the text
    pub word: String,
    /// Number of occurrences, always at least one
    pub count: usize,
}

/// Counts of distinct words, kept in the order each word was first observed
///
/// The lookup index and the ordered entries are updated together by
/// [`observe`](Self::observe), so every indexed word has exactly one entry
/// and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`
    pub fn observe(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].count += 1;
        } else {
            self.index.insert(word.to_owned(), self.entries.len());
            self.entries.push(WordCount {
                word: word.to_owned(),
                count: 1,
            });
        }
    }

    /// Observe every word run of `text`, returning how many were seen
    pub fn observe_text(&mut self, text: &str, separators: &SeparatorAlphabet) -> usize {
        let mut observed = 0;
        for word in words(text, separators) {
            self.observe(word);
            observed += 1;
        }
        observed
    }

    /// Add every count of `other` to this table
    ///
    /// Words new to this table are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: FrequencyTable) {
        for entry in other.entries {
            if let Some(&slot) = self.index.get(&entry.word) {
                self.entries[slot].count += entry.count;
            } else {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Count for a word that has been observed
    ///
    /// # Panics
    ///
    /// Panics if `word` was never observed. Use [`get`](Self::get) for
    /// arbitrary lookups.
    pub fn count_of(&self, word: &str) -> usize {
        match self.get(word) {
            Some(count) => count,
            None => panic!("count requested for unobserved word {word:?}"),
        }
    }

    /// Count for `word`, or `None` if it was never observed
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    /// Check whether `word` has been observed
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Distinct words in first-seen order
    pub fn distinct_words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been observed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total_words(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
