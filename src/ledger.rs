//! 账本（收藏、最近游玩、用户设置）
//!
//! 每个账本都是一个存放在单个键下的 JSON 值，每次修改都是"整体读取、内存修改、整体写回"。

pub mod favourites_ledger;
pub mod recency_ledger;
pub mod settings_ledger;

pub use favourites_ledger::FavouritesLedger;
pub use recency_ledger::{RecencyLedger, most_recent_first};
pub use settings_ledger::SettingsLedger;

/// 收藏列表存储键
pub const FAVOURITES_KEY: &str = "gamezop:favourites";
/// 最近游玩存储键
pub const RECENTLY_PLAYED_KEY: &str = "gamezop:recent";
/// 用户设置存储键
pub const SETTINGS_KEY: &str = "gamezop:settings";
