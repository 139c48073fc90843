//! Text segmentation: sentences and filtered word tokens

pub mod sentences;
pub mod tokenizer;

pub use sentences::{count_sentences, split_sentences};
pub use tokenizer::{tokenize, word_tokens, TokenizedText};
