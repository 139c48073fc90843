//! Reading word lists from disk
//!
//! Word-list files hold one word per line. A few conventions from the
//! published dictionaries are understood:
//!
//! - `WORD | description` annotations (name and geographic lists) keep only
//!   the part before the `|`
//! - lines starting with `;` are comments (opinion lexicon headers)
//! - files that are not valid UTF-8 are decoded as Latin-1

use std::fs;
use std::path::{Path, PathBuf};

use super::{normalize_word, Lexicon, LexiconSet};
use crate::config::LexiconConfig;
use crate::errors::{Error, Result};

/// Parse the contents of a word-list file
pub fn parse_word_list(text: &str) -> Lexicon {
    let words = text
        .lines()
        .map(strip_annotation)
        .filter(|line| !line.trim_start().starts_with(';'))
        .filter_map(normalize_word)
        .collect::<rustc_hash::FxHashSet<_>>();
    Lexicon { words }
}

fn strip_annotation(line: &str) -> &str {
    match line.split_once('|') {
        Some((word, _)) => word,
        None => line,
    }
}

/// Decode raw word-list bytes, falling back to Latin-1
pub fn decode_word_list(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Load a single word-list file.
///
/// `kind` names the lexicon in error messages and logs.
pub fn load_lexicon_file(kind: &str, path: &Path) -> Result<Lexicon> {
    let bytes = fs::read(path).map_err(|e| Error::lexicon(kind, path, e))?;
    let lexicon = parse_word_list(&decode_word_list(bytes));
    tracing::debug!(
        kind,
        path = %path.display(),
        words = lexicon.len(),
        "Loaded word list"
    );
    Ok(lexicon)
}

/// Load several files into one lexicon (set union)
pub fn load_lexicon_files(kind: &str, paths: &[PathBuf]) -> Result<Lexicon> {
    paths.iter().try_fold(Lexicon::empty(), |acc, path| {
        Ok(acc.union(load_lexicon_file(kind, path)?))
    })
}

/// Load stop, positive and negative lexicons described by the configuration.
///
/// Any missing or unreadable file aborts the load.
pub fn load_lexicon_set(config: &LexiconConfig) -> Result<LexiconSet> {
    let stop_words = load_lexicon_files("stop-word", &config.stop_words)?;
    let positive = load_lexicon_file("positive", &config.positive_words)?;
    let negative = load_lexicon_file("negative", &config.negative_words)?;

    for (kind, lexicon) in [
        ("stop-word", &stop_words),
        ("positive", &positive),
        ("negative", &negative),
    ] {
        if lexicon.is_empty() {
            tracing::warn!(kind, "Lexicon is empty; its scores will always be zero");
        }
    }

    let set = LexiconSet::new(stop_words, positive, negative);
    let overlap = set.sentiment_overlap();
    if !overlap.is_empty() {
        tracing::warn!(
            count = overlap.len(),
            sample = ?overlap.iter().take(5).collect::<Vec<_>>(),
            "Positive and negative lexicons share words; they count toward both scores"
        );
    }

    tracing::info!(
        stop_words = set.stop_words.len(),
        positive = set.positive.len(),
        negative = set.negative.len(),
        "Lexicons loaded"
    );
    Ok(set)
}
