//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML config file into [`AppConfig`]. `load_config` is pure data
//! loading; `resolve_config` is what the binary calls, and it is the only
//! place where empty values are replaced with platform defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mz_core::config::{AppConfig, DEFAULT_STORE_FILE_NAME};

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "menuz";

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "MENUZ_CONFIG";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the config at `config_path` if given and present, then fill empty
/// values from `system_data_dir`.
///
/// A path that is given but missing is not an error; a file that exists but
/// cannot be parsed is.
pub fn resolve_config(
    config_path: Option<&Path>,
    system_data_dir: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    let config = match config_path {
        Some(path) if path.exists() => load_config(path.to_path_buf())?,
        _ => AppConfig::empty(),
    };
    Ok(fill_defaults(config, system_data_dir))
}

fn fill_defaults(mut config: AppConfig, system_data_dir: Option<PathBuf>) -> AppConfig {
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = system_data_dir
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME));
    }
    if config.store_file_name.is_empty() {
        config.store_file_name = DEFAULT_STORE_FILE_NAME.to_string();
    }
    config
}
