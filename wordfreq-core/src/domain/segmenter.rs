//! Maximal-run segmentation
//!
//! Text is split into alternating runs of separator and non-separator
//! characters. Each run is as long as possible: the character right after a
//! run always has the opposite classification, or the text ends there.
//! Concatenating the runs in order gives back the original text.

use crate::domain::separators::SeparatorAlphabet;

/// Classification of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Characters outside the separator alphabet
    Word,
    /// Characters from the separator alphabet
    Separator,
}

/// A maximal run of uniformly classified characters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    /// The run's text
    pub text: &'a str,
    /// Whether the run is a word or a separator run
    pub kind: RunKind,
    /// Byte offset where the run starts
    pub start: usize,
    /// Byte offset one past the run's last byte
    pub end: usize,
}

impl Run<'_> {
    /// Check if this run is a word
    pub fn is_word(&self) -> bool {
        self.kind == RunKind::Word
    }

    /// Check if this run is a separator run
    pub fn is_separator(&self) -> bool {
        self.kind == RunKind::Separator
    }
}

/// Return the maximal run that begins at byte offset `start`
///
/// # Panics
///
/// Panics if `start` is not less than `text.len()` or does not fall on a
/// character boundary. Callers resume at the previous run's `end`, which
/// always satisfies both.
pub fn next_run<'a>(text: &'a str, start: usize, separators: &SeparatorAlphabet) -> Run<'a> {
    assert!(
        start < text.len(),
        "run start {start} out of range for text of length {}",
        text.len()
    );
    assert!(
        text.is_char_boundary(start),
        "run start {start} is not on a character boundary"
    );

    let rest = &text[start..];
    let is_separator = rest.chars().next().is_some_and(|ch| separators.contains(ch));
    let len = rest
        .char_indices()
        .find(|&(_, ch)| separators.contains(ch) != is_separator)
        .map_or(rest.len(), |(idx, _)| idx);

    Run {
        text: &rest[..len],
        kind: if is_separator {
            RunKind::Separator
        } else {
            RunKind::Word
        },
        start,
        end: start + len,
    }
}

/// Iterator over every run of a text, left to right
#[derive(Debug, Clone)]
pub struct Runs<'a, 's> {
    text: &'a str,
    separators: &'s SeparatorAlphabet,
    offset: usize,
}

impl<'a, 's> Runs<'a, 's> {
    /// Start segmenting `text` from its beginning
    pub fn new(text: &'a str, separators: &'s SeparatorAlphabet) -> Self {
        Self {
            text,
            separators,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Runs<'a, '_> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let run = next_run(self.text, self.offset, self.separators);
        self.offset = run.end;
        Some(run)
    }
}

impl std::iter::FusedIterator for Runs<'_, '_> {}

/// Segment `text` into runs
pub fn runs<'a, 's>(text: &'a str, separators: &'s SeparatorAlphabet) -> Runs<'a, 's> {
    Runs::new(text, separators)
}

/// Word runs of `text`, separator runs skipped
pub fn words<'a, 's>(
    text: &'a str,
    separators: &'s SeparatorAlphabet,
) -> impl Iterator<Item = &'a str> + 's
where
    'a: 's,
{
    runs(text, separators)
        .filter(Run::is_word)
        .map(|run| run.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_separators() -> SeparatorAlphabet {
        SeparatorAlphabet::from_chars(" \t\n,.;:-")
    }

    #[test]
    fn test_word_run_at_start() {
        let seps = default_separators();
        let run = next_run("hello world", 0, &seps);
        assert_eq!(run.text, "hello");
        assert_eq!(run.kind, RunKind::Word);
        assert_eq!(run.end, 5);
    }

    #[test]
    fn test_separator_run_is_maximal() {
        let seps = default_separators();
        let run = next_run("a, .\tb", 1, &seps);
        assert_eq!(run.text, ", .\t");
        assert!(run.is_separator());
        assert_eq!(run.start, 1);
        assert_eq!(run.end, 5);
    }

    #[test]
    fn test_run_ending_at_end_of_text() {
        let seps = default_separators();
        let run = next_run("one two", 4, &seps);
        assert_eq!(run.text, "two");
        assert_eq!(run.end, 7);
    }

    #[test]
    fn test_single_character_text() {
        let seps = default_separators();
        assert_eq!(next_run("x", 0, &seps).text, "x");
        assert!(next_run(" ", 0, &seps).is_separator());
    }

    #[test]
    fn test_punctuation_outside_alphabet_is_word() {
        let seps = default_separators();
        let collected: Vec<&str> = words("sat! (yes) 42", &seps).collect();
        assert_eq!(collected, vec!["sat!", "(yes)", "42"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let seps = SeparatorAlphabet::from_chars("、。 ");
        let collected: Vec<&str> = words("日本語、テスト。 café", &seps).collect();
        assert_eq!(collected, vec!["日本語", "テスト", "café"]);
    }

    #[test]
    fn test_runs_partition_text() {
        let seps = default_separators();
        let text = "  The cat; sat -- on\tthe mat.\n";
        let rebuilt: String = runs(text, &seps).map(|run| run.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_runs_alternate_kinds() {
        let seps = default_separators();
        let kinds: Vec<RunKind> = runs("a b,c", &seps).map(|run| run.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RunKind::Word,
                RunKind::Separator,
                RunKind::Word,
                RunKind::Separator,
                RunKind::Word
            ]
        );
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let seps = default_separators();
        assert_eq!(runs("", &seps).count(), 0);
    }

    #[test]
    fn test_empty_alphabet_yields_single_word() {
        let seps = SeparatorAlphabet::new();
        let all: Vec<Run> = runs("no separators here", &seps).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_word());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_past_end_panics() {
        let seps = default_separators();
        next_run("abc", 3, &seps);
    }

    #[test]
    #[should_panic(expected = "character boundary")]
    fn test_start_inside_character_panics() {
        let seps = default_separators();
        next_run("é", 1, &seps);
    }
}
