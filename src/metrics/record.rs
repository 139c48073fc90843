//! The per-article metric record and its output schema

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output column names, in canonical order
pub const FIELD_NAMES: [&str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Readability and sentiment metrics for one article
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    /// Sentiment balance in [-1, 1]
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    /// Share of sentiment-bearing tokens
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    /// Gunning fog readability index
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Mirrors `avg_sentence_length`
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

/// A single metric cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Ratio(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Ratio(x) => x,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Ratio(x) => write!(f, "{x}"),
        }
    }
}

impl MetricRecord {
    /// Field name / value pairs in [`FIELD_NAMES`] order
    pub fn fields(&self) -> [(&'static str, MetricValue); 13] {
        use MetricValue::{Count, Ratio};
        [
            (FIELD_NAMES[0], Count(self.positive_score)),
            (FIELD_NAMES[1], Count(self.negative_score)),
            (FIELD_NAMES[2], Ratio(self.polarity_score)),
            (FIELD_NAMES[3], Ratio(self.subjectivity_score)),
            (FIELD_NAMES[4], Ratio(self.avg_sentence_length)),
            (FIELD_NAMES[5], Ratio(self.percentage_complex_words)),
            (FIELD_NAMES[6], Ratio(self.fog_index)),
            (FIELD_NAMES[7], Ratio(self.avg_words_per_sentence)),
            (FIELD_NAMES[8], Count(self.complex_word_count)),
            (FIELD_NAMES[9], Count(self.word_count)),
            (FIELD_NAMES[10], Ratio(self.syllable_per_word)),
            (FIELD_NAMES[11], Count(self.personal_pronouns)),
            (FIELD_NAMES[12], Ratio(self.avg_word_length)),
        ]
    }

    /// Look up a value by its output column name
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}
