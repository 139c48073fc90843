//! Readability and sentiment metrics
//!
//! [`MetricsEngine`] turns raw article text into a [`MetricRecord`] using the
//! tokenizer from [`crate::text`] and the heuristic syllable counter.

pub mod engine;
pub mod record;
pub mod syllables;

pub use engine::{analyze, compute_metrics, is_personal_pronoun, MetricsEngine, PERSONAL_PRONOUNS};
pub use record::{MetricRecord, MetricValue, FIELD_NAMES};
pub use syllables::{count_syllables, is_complex_word};
