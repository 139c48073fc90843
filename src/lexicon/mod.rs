//! Word lists used for classification
//!
//! A [`Lexicon`] is an immutable set of normalized (lower-cased, trimmed)
//! words. Three of them make up a [`LexiconSet`]: stop words, positive words
//! and negative words. The set is loaded once at batch start and shared
//! read-only by every analysis.

pub mod loader;

pub use loader::{decode_word_list, load_lexicon_file, load_lexicon_set, parse_word_list};

use rustc_hash::FxHashSet;

/// An immutable set of normalized words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon from raw words, normalizing each one.
    ///
    /// Words that are empty after trimming are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Check membership. Lookup is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Merge another lexicon into a new one (set union)
    pub fn union(mut self, other: Lexicon) -> Self {
        self.words.extend(other.words);
        self
    }

    /// Words present in both lexicons, sorted
    pub fn intersection<'a>(&'a self, other: &Lexicon) -> Vec<&'a str> {
        let mut shared: Vec<&str> = self
            .words
            .iter()
            .filter(|w| other.words.contains(*w))
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        shared
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// The three word lists an analysis needs
#[derive(Debug, Clone, Default)]
pub struct LexiconSet {
    pub stop_words: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl LexiconSet {
    pub fn new(stop_words: Lexicon, positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            stop_words,
            positive,
            negative,
        }
    }

    /// Words that are both positive and negative.
    ///
    /// Such words count toward both scores; they are reported, not removed.
    pub fn sentiment_overlap(&self) -> Vec<&str> {
        self.positive.intersection(&self.negative)
    }
}

/// Lower-case and trim a single word, `None` if nothing is left
pub(crate) fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
