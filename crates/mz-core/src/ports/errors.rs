use thiserror::Error;

/// The single storage-failure kind surfaced by key-value adapters and stores.
///
/// 存储层唯一的错误类型：I/O、配额以及 JSON 解析失败都归入这里。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("failed to parse stored value: {0}")]
    Parse(String),

    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}
