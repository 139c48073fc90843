use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for article-metrics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ArticleMetricsConfig {
    /// Word-list locations
    #[serde(default)]
    pub lexicons: LexiconConfig,

    /// Article download settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Input table settings
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Paths of the stop, positive and negative word lists.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconConfig {
    /// Stop-word files, merged into one lexicon
    #[serde(default = "default_stop_word_files")]
    pub stop_words: Vec<PathBuf>,

    #[serde(default = "default_positive_words")]
    pub positive_words: PathBuf,

    #[serde(default = "default_negative_words")]
    pub negative_words: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_word_files(),
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
        }
    }
}

pub fn default_stop_word_files() -> Vec<PathBuf> {
    [
        "StopWords_Auditor.txt",
        "StopWords_Currencies.txt",
        "StopWords_DatesandNumbers.txt",
        "StopWords_Generic.txt",
        "StopWords_GenericLong.txt",
        "StopWords_Geographic.txt",
        "StopWords_Names.txt",
    ]
    .iter()
    .map(|name| PathBuf::from("resource/StopWords").join(name))
    .collect()
}

pub fn default_positive_words() -> PathBuf {
    PathBuf::from("resource/MasterDictionary/positive_words.txt")
}

pub fn default_negative_words() -> PathBuf {
    PathBuf::from("resource/MasterDictionary/negative_words.txt")
}

/// HTTP settings for the article fetcher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on DOM elements the readability pass inspects
    #[serde(default = "default_max_elements")]
    pub max_elements_to_parse: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_elements_to_parse: default_max_elements(),
        }
    }
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_user_agent() -> String {
    format!("article-metrics/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_max_elements() -> usize {
    9000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Name of the CSV column holding article URLs
    #[serde(default = "default_url_column")]
    pub url_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            url_column: default_url_column(),
        }
    }
}

pub fn default_url_column() -> String {
    "URL".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `csv`, `json`, `terminal`
    #[serde(default)]
    pub default_format: Option<String>,

    /// Directory for raw article text dumps, disabled when unset
    #[serde(default)]
    pub dump_text_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: ArticleMetricsConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArticleMetricsConfig::default());
        assert_eq!(config.lexicons.stop_words.len(), 7);
        assert_eq!(config.input.url_column, "URL");
        assert_eq!(config.fetch.timeout_secs, 30);
    }

    #[test]
    fn test_default_word_list_locations() {
        let lexicons = LexiconConfig::default();
        assert_eq!(
            lexicons.positive_words,
            PathBuf::from("resource/MasterDictionary/positive_words.txt")
        );
        assert_eq!(
            lexicons.negative_words,
            PathBuf::from("resource/MasterDictionary/negative_words.txt")
        );
        assert_eq!(
            lexicons.stop_words[0],
            PathBuf::from("resource/StopWords/StopWords_Auditor.txt")
        );
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: ArticleMetricsConfig = toml::from_str(
            r#"
            [lexicons]
            positive_words = "words/pos.txt"

            [fetch]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.lexicons.positive_words, PathBuf::from("words/pos.txt"));
        assert_eq!(config.lexicons.negative_words, default_negative_words());
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.max_elements_to_parse, 9000);
    }
}
