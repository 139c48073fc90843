//! Progress feedback for batch runs.
//!
//! Progress bars use the `indicatif` library and are drawn on stderr.
//!
//! # Progress Behavior
//!
//! - **Quiet Mode**: No progress output (respects `ARTICLE_METRICS_QUIET` env var and `--quiet` flag)
//! - **Non-TTY**: Gracefully disables progress bars in CI and piped output
//!
//! # Examples
//!
//! ```rust,no_run
//! use article_metrics::progress::{ProgressConfig, ProgressManager, TEMPLATE_ARTICLES};
//!
//! let manager = ProgressManager::new(ProgressConfig::from_env(false));
//! let progress = manager.create_bar(100, TEMPLATE_ARTICLES);
//! progress.set_message("Analyzing articles");
//! for _i in 0..100 {
//!     progress.inc(1);
//! }
//! progress.finish_with_message("Analysis complete");
//! ```

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_ARTICLES: &str = "📰 {msg} {pos}/{len} articles ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("ARTICLE_METRICS_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Creates progress bars according to a [`ProgressConfig`]
#[derive(Debug, Clone, Default)]
pub struct ProgressManager {
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// A manager whose bars are never drawn
    pub fn hidden() -> Self {
        Self::new(ProgressConfig { quiet_mode: true })
    }

    /// Create a progress bar with the given length and template
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::default_bar().template(template) {
            Ok(style) => pb.set_style(style.progress_chars("█▓▒░  ")),
            Err(e) => tracing::debug!("Invalid progress bar template: {}", e),
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::from_env(true);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_hidden_manager_creates_hidden_bars() {
        let bar = ProgressManager::hidden().create_bar(10, TEMPLATE_ARTICLES);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_article_template_is_valid() {
        assert!(ProgressStyle::default_bar().template(TEMPLATE_ARTICLES).is_ok());
    }
}
