//! 数据实体模块
//!
//! 包含账本中持久化的 JSON 数据结构。

pub mod prelude;

// === 游戏目录记录（由外部目录接口提供）===
pub mod game;

// === 账本记录（存储在持久化键值存储中）===
pub mod recent_play;
pub mod settings;
