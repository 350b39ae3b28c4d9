use crate::error::{Result, WrapErr};
use config::constants::STORE_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// Where the key-value store (recent searches) lives
    pub data_dir: PathBuf,
    /// JSON array of articles; the built-in dataset when unset
    pub catalog_path: Option<PathBuf>,
    /// Simulated latency of the results page
    pub search_delay_ms: u64,
}

fn default_config() -> Config {
    Config {
        data_dir: config::data_dir(),
        catalog_path: None,
        search_delay_ms: catalog::DEFAULT_SEARCH_DELAY.as_millis() as u64,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load from `path`, or from the platform config directory when `None`.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => config::default_config_file(),
        };

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration in {:?}", config_path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# Thinkverse configuration
#
# Created on first run. All keys are optional.

# Directory holding recent searches
# data-dir = "/custom/data/path"

# JSON array of articles to use instead of the built-in dataset
# catalog-path = "/path/to/articles.json"

# Simulated latency of the search results page, in milliseconds
# search-delay-ms = 500
"#;

        std::fs::write(config_path, example_config)?;
        eprintln!("Created configuration file: {:?}", config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::load_str("").unwrap();
        assert_eq!(cfg.search_delay_ms, 500);
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn test_kebab_case_keys() {
        let cfg = Config::load_str(
            r#"
data-dir = "/tmp/thinkverse"
catalog-path = "/tmp/articles.json"
search-delay-ms = 0
"#,
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/thinkverse"));
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/tmp/articles.json")));
        assert_eq!(cfg.search_delay(), Duration::ZERO);
        assert_eq!(cfg.store_path(), PathBuf::from("/tmp/thinkverse").join(STORE_FILE_NAME));
    }

    #[test]
    fn test_missing_file_creates_example() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("thinkverse.toml");

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());

        // the example is all comments, so it loads back to the defaults
        assert!(path.exists());
        assert_eq!(Config::load(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::load_str("watch-paths = []").is_err());
    }
}
