use std::fs;
use std::path::{Path, PathBuf};

use super::core::ArticleMetricsConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".article-metrics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<ArticleMetricsConfig> {
    Ok(toml::from_str::<ArticleMetricsConfig>(contents)?)
}

/// Load configuration from an explicit path. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<ArticleMetricsConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    let config = parse_config(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a single candidate path; `None` when missing or invalid
fn try_load_config_from_path(config_path: &Path) -> Option<ArticleMetricsConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Directory ancestors of `start`, itself included, up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a configuration file
pub fn discover_config(start: PathBuf) -> ArticleMetricsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ArticleMetricsConfig::default()
        })
}

/// Load configuration: an explicit path must exist, otherwise discover one
/// from the current directory upward.
pub fn load_config(explicit: Option<&Path>) -> Result<ArticleMetricsConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(ArticleMetricsConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[input]\nurl_column = \"link\"\n",
        )
        .unwrap();
        let nested = temp.path().join("nested/deeper");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.input.url_column, "link");
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config, ArticleMetricsConfig::default());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
