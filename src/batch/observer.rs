//! Hooks that see each fetched article before it is analyzed

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fetch::FetchedArticle;
use crate::io::input::InputRow;

/// Receives every successfully fetched article.
///
/// Observer failures are logged by the runner and never affect the metrics.
pub trait ArticleObserver: Send + Sync {
    fn on_article(&self, row: &InputRow, article: &FetchedArticle) -> Result<()>;
}

/// Writes each article's text to `<dir>/<index>_article_text.txt`
#[derive(Debug, Clone)]
pub struct TextDumpObserver {
    dir: PathBuf,
}

impl TextDumpObserver {
    /// Create the observer, making sure the directory exists
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, row: &InputRow) -> PathBuf {
        self.dir.join(format!("{}_article_text.txt", row.index))
    }
}

impl ArticleObserver for TextDumpObserver {
    fn on_article(&self, row: &InputRow, article: &FetchedArticle) -> Result<()> {
        let path = self.path_for(row);
        fs::write(&path, &article.text)?;
        tracing::debug!(path = %path.display(), "Wrote article text");
        Ok(())
    }
}
