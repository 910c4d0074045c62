//! # Configuration DTO
//!
//! Pure data: TOML → [`AppConfig`] mapping only. Missing values are empty
//! facts, not errors. Resolving an empty value to a platform default is the
//! caller's job (see the root crate's bootstrap).

use std::path::PathBuf;

/// Default file name of the key-value store inside the data directory.
pub const DEFAULT_STORE_FILE_NAME: &str = "menuz_store.json";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the store file (may be empty)
    pub data_dir: PathBuf,

    /// Store file name inside `data_dir` (may be empty)
    pub store_file_name: String,

    /// tracing filter directives, e.g. `"info,mz_app=debug"` (may be empty)
    pub log_filter: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            store_file_name: toml_value
                .get("storage")
                .and_then(|s| s.get("file_name"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_filter: toml_value
                .get("logging")
                .and_then(|l| l.get("filter"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            store_file_name: String::new(),
            log_filter: String::new(),
        }
    }

    /// Create AppConfig rooted at a caller-computed data directory.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            store_file_name: DEFAULT_STORE_FILE_NAME.to_string(),
            log_filter: String::new(),
        }
    }

    /// Full path of the store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file_name)
    }
}
