//! Key-value persistence port
//!
//! This port defines the contract for the device-local string store every
//! preference store sits on. Implementations are provided by the
//! infrastructure layer (e.g., in-memory or file-based storage).

use async_trait::async_trait;

use super::errors::StorageError;

/// Asynchronous string-keyed store.
///
/// 异步字符串键值存储端口。
///
/// # Behavior / 行为
/// - `set` and `remove` should be idempotent.
/// - No atomicity is guaranteed across multiple keys.
///
/// - `set` 与 `remove` 应当具备幂等性。
/// - 多个键之间不保证原子性。
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Get the value stored under `key`. A missing key is `Ok(None)`, never an error.
    ///
    /// 读取 `key` 对应的值；键不存在时返回 `Ok(None)`。
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// 写入 `key`，覆盖已有的值。
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// 删除 `key`；删除不存在的键同样成功。
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
