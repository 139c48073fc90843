//! Configuration for article-metrics
//!
//! Settings come from `.article-metrics.toml`, found by walking up from the
//! working directory, or from an explicit `--config` path. Every section is
//! optional and falls back to defaults. CLI flags override file values.

mod core;
mod loader;

pub use self::core::{
    default_negative_words, default_positive_words, default_stop_word_files, ArticleMetricsConfig,
    FetchConfig, InputConfig, LexiconConfig, OutputConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
