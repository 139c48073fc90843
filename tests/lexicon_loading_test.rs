//! Loading word lists from disk into a lexicon set

use article_metrics::config::LexiconConfig;
use article_metrics::lexicon::loader::load_lexicon_files;
use article_metrics::{load_lexicon_set, Error};
use indoc::indoc;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config(dir: &TempDir) -> LexiconConfig {
    LexiconConfig {
        stop_words: vec![
            write(dir, "StopWords_Generic.txt", b"THE\nAND\nIS\n"),
            write(
                dir,
                "StopWords_Names.txt",
                indoc! {"
                    SMITH | Surnames from 1990 census > .002%
                    JOHNSON | Surnames
                "}
                .as_bytes(),
            ),
        ],
        positive_words: write(
            dir,
            "positive-words.txt",
            indoc! {"
                ; Opinion lexicon
                ;
                good
                great
            "}
            .as_bytes(),
        ),
        negative_words: write(dir, "negative-words.txt", b"bad\nworse\n"),
    }
}

#[test]
fn test_stop_word_files_are_merged() {
    let temp = TempDir::new().unwrap();
    let set = load_lexicon_set(&config(&temp)).unwrap();

    assert_eq!(set.stop_words.len(), 5);
    assert!(set.stop_words.contains("the"));
    assert!(set.stop_words.contains("smith"));
    assert!(!set.stop_words.contains("surnames"));
    assert_eq!(set.positive.len(), 2);
    assert_eq!(set.negative.len(), 2);
}

#[test]
fn test_missing_file_is_fatal_and_named() {
    let temp = TempDir::new().unwrap();
    let mut config = config(&temp);
    config.negative_words = temp.path().join("nope.txt");

    let err = load_lexicon_set(&config).unwrap_err();
    assert!(matches!(err, Error::Lexicon { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_latin1_word_list_is_decoded() {
    let temp = TempDir::new().unwrap();
    // "café" and "naïve" in Latin-1
    let path = write(&temp, "latin1.txt", b"caf\xe9\nna\xefve\n");

    let lexicon = load_lexicon_files("stop-word", &[path]).unwrap();
    assert!(lexicon.contains("café"));
    assert!(lexicon.contains("naïve"));
}

#[test]
fn test_empty_file_loads_as_empty_lexicon() {
    let temp = TempDir::new().unwrap();
    let mut config = config(&temp);
    config.positive_words = write(&temp, "empty.txt", b"");

    let set = load_lexicon_set(&config).unwrap();
    assert!(set.positive.is_empty());
}
