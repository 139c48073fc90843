//! Sentence segmentation
//!
//! Boundaries come from Unicode sentence segmentation (UAX #29), followed by
//! a merge pass. UAX #29 breaks after every terminal period followed by an
//! upper-case word and at every line break, so a segment is joined to the
//! next one when it ends in a known abbreviation ("Mr.", "e.g.", "U.S."), a
//! single-letter initial, or no terminal punctuation at all (hard-wrapped
//! lines, headings).

use unicode_segmentation::UnicodeSegmentation;

/// Closing characters allowed after the terminal mark (`."`, `?)`)
const CLOSERS: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}'];

/// Abbreviations that do not end a sentence, lower-case without the period
///
/// Abbreviations that double as common sentence-final words ("no", "sat")
/// are left out.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "gen", "gov", "sen", "rep",
    "rev", "hon", "capt", "col", "lt", "sgt", "co", "corp", "inc", "ltd", "bros", "dept", "univ",
    "approx", "vs", "etc", "fig", "figs", "vol", "vols", "pp", "jan", "feb", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec", "tue", "tues", "thu", "thurs", "fri", "ave",
    "blvd", "rd",
];

/// Split text into sentences, trimmed, in document order.
///
/// Whitespace-only input yields no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = Vec::new();
    let mut pending_start: Option<usize> = None;

    for (offset, segment) in text.split_sentence_bound_indices() {
        if segment.trim().is_empty() && pending_start.is_none() {
            continue;
        }
        let start = pending_start.unwrap_or(offset);
        let end = offset + segment.len();

        if !ends_with_terminal(segment) || ends_with_abbreviation(segment) {
            pending_start = Some(start);
            continue;
        }

        pending_start = None;
        push_trimmed(&mut sentences, &text[start..end]);
    }

    if let Some(start) = pending_start {
        push_trimmed(&mut sentences, &text[start..]);
    }

    sentences
}

/// Number of sentences in the text
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn ends_with_terminal(segment: &str) -> bool {
    segment
        .trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(['.', '!', '?'])
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(last) = segment.split_whitespace().next_back() else {
        return false;
    };
    let Some(stem) = last.strip_suffix('.') else {
        return false;
    };
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
    if stem.is_empty() {
        return false;
    }

    // Initials ("J.") and dotted forms ("e.g.", "U.S.")
    if stem.chars().count() == 1 && stem.chars().all(char::is_alphabetic) {
        return true;
    }
    if stem.contains('.') && stem.split('.').all(|part| part.chars().count() == 1) {
        return true;
    }

    ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
}
