//! Where Thinkverse keeps its files.
//!
//! Every directory can be redirected through an environment variable, which
//! wins over the platform convention.

pub mod constants;

use etcetera::{AppStrategy, AppStrategyArgs, HomeDirError, choose_app_strategy};
use std::env;
use std::path::PathBuf;

pub const CONFIG_DIR_ENV: &str = "CONFIG_DIRECTORY";
pub const DATA_DIR_ENV: &str = "DATA_DIRECTORY";

pub fn app_strategy() -> Result<impl AppStrategy, HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// `env_key` if set, else `platform`, else a directory under the system temp
/// dir.
pub fn resolve_dir(env_key: &str, platform: Option<PathBuf>) -> PathBuf {
    env::var_os(env_key)
        .map(PathBuf::from)
        .or(platform)
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

pub fn config_dir() -> PathBuf {
    resolve_dir(CONFIG_DIR_ENV, app_strategy().ok().map(|s| s.config_dir()))
}

pub fn data_dir() -> PathBuf {
    resolve_dir(DATA_DIR_ENV, app_strategy().ok().map(|s| s.data_dir()))
}

pub fn default_config_file() -> PathBuf {
    config_dir().join(constants::CONFIG_FILE_NAME)
}
