//! 用户设置 JSON 结构体

use serde::{Deserialize, Serialize};

/// 用户设置（与账本存放在同一个键值存储中）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// 游戏目录来源（文件路径或 http(s) 地址）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,
}
