//! Word tokenization and filtering
//!
//! Words are split Treebank style: whitespace separates chunks, separators
//! inside a chunk (`--`, `;`, brackets, quotes, `,` and `:` before a
//! non-digit) become their own tokens, leading and trailing punctuation is
//! peeled off, and English contractions are split into a head and a clitic
//! ("don't" -> "do" + "n't", "it's" -> "it" + "'s"). Hyphenated and dotted
//! forms ("well-known", "3.5") and digit groups ("1,000", "10:30") stay whole.
//!
//! Filtering then keeps a token only if every character is alphanumeric and
//! its lower-cased form is not a stop word. Punctuation, clitics and
//! hyphenated forms therefore never survive.

use super::sentences::count_sentences;
use crate::lexicon::Lexicon;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Characters that always stand alone, wherever they occur in a chunk
const SEPARATORS: &[char] = &[
    ';', '(', ')', '[', ']', '{', '}', '<', '>', '"', '?', '!', '@', '#', '$', '%', '&',
    '\u{201C}', '\u{201D}',
];

/// Filtered tokens of a document plus its sentence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// Lower-cased, alphanumeric, non-stop-word tokens in document order
    pub tokens: Vec<String>,
    pub sentence_count: usize,
}

impl TokenizedText {
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenize raw text, dropping punctuation and stop words
pub fn tokenize(text: &str, stop_words: &Lexicon) -> TokenizedText {
    let tokens = word_tokens(text)
        .into_iter()
        .filter(|token| is_alphanumeric(token))
        .map(str::to_lowercase)
        .filter(|token| !stop_words.contains(token))
        .collect();

    TokenizedText {
        tokens,
        sentence_count: count_sentences(text),
    }
}

/// Split text into raw word-level tokens, punctuation included
pub fn word_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn split_chunk<'a>(chunk: &'a str, tokens: &mut Vec<&'a str>) {
    let mut start = 0;
    let mut chars = chunk.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let width = match c {
            '-' if next == Some('-') => 2,
            ',' | ':' if !next.is_some_and(|n| n.is_ascii_digit()) => 1,
            c if SEPARATORS.contains(&c) => c.len_utf8(),
            _ => continue,
        };
        if c == '-' {
            chars.next();
        }
        split_word(&chunk[start..i], tokens);
        tokens.push(&chunk[i..i + width]);
        start = i + width;
    }
    split_word(&chunk[start..], tokens);
}

fn split_word<'a>(chunk: &'a str, tokens: &mut Vec<&'a str>) {
    let core_start = chunk
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, _)| i);
    let Some(core_start) = core_start else {
        push_punctuation(chunk, tokens);
        return;
    };
    let core_end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(chunk.len());

    push_punctuation(&chunk[..core_start], tokens);
    split_contraction(&chunk[core_start..core_end], tokens);
    push_punctuation(&chunk[core_end..], tokens);
}

fn push_punctuation<'a>(run: &'a str, tokens: &mut Vec<&'a str>) {
    for (i, c) in run.char_indices() {
        tokens.push(&run[i..i + c.len_utf8()]);
    }
}

fn split_contraction<'a>(core: &'a str, tokens: &mut Vec<&'a str>) {
    let lower = core.to_lowercase();
    let negation = ["n't", "n\u{2019}t"]
        .iter()
        .find(|suffix| lower.ends_with(*suffix) && lower.len() > suffix.len());
    if let Some(suffix) = negation {
        // Lower-casing can change byte lengths, so split on the original text
        let split = core.len() - suffix.len();
        if core.is_char_boundary(split) {
            tokens.push(&core[..split]);
            tokens.push(&core[split..]);
            return;
        }
    }

    match core.rfind(APOSTROPHES) {
        Some(split) if split > 0 => {
            tokens.push(&core[..split]);
            tokens.push(&core[split..]);
        }
        _ => tokens.push(core),
    }
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
