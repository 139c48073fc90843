//! Metric computation over filtered tokens
//!
//! # Formulas
//!
//! With `T` the filtered tokens and `|T|` the word count:
//!
//! - polarity = (pos - neg) / (pos + neg + 1e-6)
//! - subjectivity = (pos + neg) / (|T| + 1e-6)
//! - avg sentence length = |T| / sentences
//! - avg word length = sum(len(t)) / |T|
//! - complex percentage = complex / |T| * 100
//! - fog index = 0.4 * (avg sentence length + complex percentage)
//! - syllables per word = sum(syllables(t)) / |T|
//!
//! # Empty documents
//!
//! A document with no surviving tokens (or no sentences) still produces a
//! complete record. Every ratio with a zero denominator is 0; the
//! epsilon-smoothed polarity and subjectivity are 0 as well.

use std::sync::Arc;

use super::record::MetricRecord;
use super::syllables::{count_syllables, COMPLEX_WORD_SYLLABLES};
use crate::lexicon::{Lexicon, LexiconSet};
use crate::text::{tokenize, TokenizedText};

/// Smoothing term for polarity and subjectivity
pub const SCORE_EPSILON: f64 = 0.000001;

/// Weight of the Gunning fog index
pub const FOG_WEIGHT: f64 = 0.4;

/// First-person pronouns, compared against whole tokens
pub const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

/// Analyzes article text against a fixed set of lexicons.
///
/// The lexicons are shared read-only, so one engine can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    lexicons: Arc<LexiconSet>,
}

impl MetricsEngine {
    pub fn new(lexicons: LexiconSet) -> Self {
        Self {
            lexicons: Arc::new(lexicons),
        }
    }

    /// Tokenize and score a document
    pub fn analyze(&self, text: &str) -> MetricRecord {
        let tokenized = tokenize(text, &self.lexicons.stop_words);
        compute_metrics(&tokenized, &self.lexicons.positive, &self.lexicons.negative)
    }
}

/// Score a document with explicit lexicons
pub fn analyze(
    text: &str,
    stop_words: &Lexicon,
    positive_words: &Lexicon,
    negative_words: &Lexicon,
) -> MetricRecord {
    let tokenized = tokenize(text, stop_words);
    compute_metrics(&tokenized, positive_words, negative_words)
}

/// Derive the metric record from already tokenized text
pub fn compute_metrics(
    tokenized: &TokenizedText,
    positive_words: &Lexicon,
    negative_words: &Lexicon,
) -> MetricRecord {
    let tokens = &tokenized.tokens;
    let word_count = tokens.len();

    let positive_score = count_matching(tokens, |t| positive_words.contains(t));
    let negative_score = count_matching(tokens, |t| negative_words.contains(t));
    let personal_pronouns = count_matching(tokens, is_personal_pronoun);

    let syllables: Vec<usize> = tokens.iter().map(|t| count_syllables(t)).collect();
    let complex_word_count = syllables
        .iter()
        .filter(|&&s| s > COMPLEX_WORD_SYLLABLES)
        .count();
    let total_syllables: usize = syllables.iter().sum();
    let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();

    let sentiment_total = (positive_score + negative_score) as f64;
    let polarity_score =
        (positive_score as f64 - negative_score as f64) / (sentiment_total + SCORE_EPSILON);
    let subjectivity_score = sentiment_total / (word_count as f64 + SCORE_EPSILON);

    let avg_sentence_length = ratio_or_zero(word_count, tokenized.sentence_count);
    let avg_word_length = ratio_or_zero(total_chars, word_count);
    let percentage_complex_words = ratio_or_zero(complex_word_count, word_count) * 100.0;
    let fog_index = FOG_WEIGHT * (avg_sentence_length + percentage_complex_words);
    let syllable_per_word = ratio_or_zero(total_syllables, word_count);

    MetricRecord {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllable_per_word,
        personal_pronouns,
        avg_word_length,
    }
}

/// Exact whole-token match, so "us" never matches inside "business"
pub fn is_personal_pronoun(token: &str) -> bool {
    PERSONAL_PRONOUNS.contains(&token)
}

fn count_matching(tokens: &[String], predicate: impl Fn(&str) -> bool) -> usize {
    tokens.iter().filter(|t| predicate(t.as_str())).count()
}

fn ratio_or_zero(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
