//! 错误类型
//!
//! 存储不可用不属于错误（读取为空、写入忽略），这里只描述真正需要调用方处理的失败。

use std::path::PathBuf;
use thiserror::Error;

pub type ShelfResult<T> = Result<T, ShelfError>;

/// 账本读写错误
#[derive(Debug, Error)]
pub enum ShelfError {
    /// 存储键下的数据不是合法的账本 JSON，原样上抛，不做修复
    #[error("存储键 {key} 中的数据已损坏: {source}")]
    Corrupted {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("无法序列化存储键 {key} 的数据: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// 游戏目录加载错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("无法读取游戏目录文件 {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("游戏目录 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("请求游戏目录失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("游戏目录接口返回错误状态: {0}")]
    Status(reqwest::StatusCode),
}
