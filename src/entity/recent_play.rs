//! 最近游玩记录 JSON 结构体

use serde::{Deserialize, Serialize};

use super::game::Game;

/// 最近游玩账本中的一条记录
///
/// 同一个 code 只保留一条，时间戳为最后一次游玩的 Unix 毫秒时间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecencyEntry {
    pub game: Game,
    pub timestamp: i64,
}
