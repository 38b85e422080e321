//! 预导入模块
//!
//! 提供常用类型的快捷导入。

pub use super::game::Game;
pub use super::recent_play::RecencyEntry;
pub use super::settings::Settings;
