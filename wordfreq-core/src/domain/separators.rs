//! Separator alphabet used to split text into word and separator runs

use std::collections::HashSet;
use std::fmt;

/// Set of characters that delimit words
///
/// Membership is the only operation the segmenter needs. Any character that
/// was not explicitly listed, including every alphanumeric character, is part
/// of a word.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SeparatorAlphabet {
    chars: HashSet<char>,
}

impl SeparatorAlphabet {
    /// Create an empty alphabet
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an alphabet from the characters of a string; duplicates collapse
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Check whether a character is a separator
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Add a character, returning `false` if it was already present
    pub fn insert(&mut self, ch: char) -> bool {
        self.chars.insert(ch)
    }

    /// Number of distinct separator characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the alphabet has no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Members in code point order
    pub fn sorted_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Render the alphabet with control characters and space written as
    /// escape sequences (`\s`, `\t`, `\n`, `\r`, `\\`)
    pub fn escaped(&self) -> String {
        let mut out = String::new();
        for ch in self.sorted_chars() {
            match ch {
                ' ' => out.push_str("\\s"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                other => out.push(other),
            }
        }
        out
    }
}

impl FromIterator<char> for SeparatorAlphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for SeparatorAlphabet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl fmt::Debug for SeparatorAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sorted_chars()).finish()
    }
}

impl fmt::Display for SeparatorAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped())
    }
}
