//! 持久化键值存储
//!
//! 账本只通过 [`StoreAdapter`] 访问存储；具体后端实现 [`KeyValueStore`]。

mod adapter;
mod file;
mod memory;

pub use adapter::StoreAdapter;
pub use file::FileStore;
pub use memory::MemoryStore;

/// 键值存储后端
///
/// 值是原始字符串（账本写入的是 JSON 文本）。写入没有返回值：
/// 后端自行记录失败，调用方不重试。
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String);
}
