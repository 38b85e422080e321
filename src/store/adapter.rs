use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::KeyValueStore;
use crate::error::{ShelfError, ShelfResult};

/// 存储适配器
///
/// 在没有可用存储的场景（非交互式运行）下退化为空操作：
/// 读取返回 `None`，写入静默忽略，不产生错误。
#[derive(Clone, Default)]
pub struct StoreAdapter {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl StoreAdapter {
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            backend: Some(Arc::new(store)),
        }
    }

    /// 不可用的存储
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.backend.as_ref()?.get(key)
    }

    pub fn set(&self, key: &str, value: String) {
        match &self.backend {
            Some(store) => store.set(key, value),
            None => log::trace!("存储不可用，忽略写入: {}", key),
        }
    }

    /// 读取并解析 JSON 值
    ///
    /// 键不存在（或为空字符串）时返回 `None`；内容损坏时返回 [`ShelfError::Corrupted`]。
    pub(crate) fn read_json<T: DeserializeOwned>(&self, key: &'static str) -> ShelfResult<Option<T>> {
        let raw = match self.get(key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ShelfError::Corrupted { key, source })
    }

    /// 序列化并整体写回
    pub(crate) fn write_json<T: Serialize>(&self, key: &'static str, value: &T) -> ShelfResult<()> {
        if !self.is_available() {
            return Ok(());
        }

        let raw =
            serde_json::to_string(value).map_err(|source| ShelfError::Encode { key, source })?;
        self.set(key, raw);
        Ok(())
    }
}

impl fmt::Debug for StoreAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAdapter")
            .field("available", &self.is_available())
            .finish()
    }
}
