//! 账本服务
//!
//! 把三个账本绑定到同一个存储上，供命令层调用。

use std::path::{Path, PathBuf};

use crate::entity::prelude::*;
use crate::error::ShelfResult;
use crate::ledger::{FavouritesLedger, RecencyLedger, SettingsLedger, most_recent_first};
use crate::store::{FileStore, StoreAdapter};
use crate::utils::fs::resolve_store_path;

/// 一个用户的收藏、最近游玩与设置
#[derive(Debug)]
pub struct Shelf {
    store: StoreAdapter,
    store_path: Option<PathBuf>,
    pub favourites: FavouritesLedger,
    pub recents: RecencyLedger,
    pub settings: SettingsLedger,
}

impl Shelf {
    /// 使用给定的存储构建
    pub fn new(store: StoreAdapter) -> Self {
        Self {
            favourites: FavouritesLedger::new(store.clone()),
            recents: RecencyLedger::new(store.clone()),
            settings: SettingsLedger::new(store.clone()),
            store,
            store_path: None,
        }
    }

    /// 打开文件存储（未指定路径时使用默认数据目录）
    pub fn open(custom_path: Option<&Path>) -> Result<Self, String> {
        let path = resolve_store_path(custom_path)?;
        let mut shelf = Self::new(StoreAdapter::new(FileStore::open(&path)));
        shelf.store_path = Some(path);
        Ok(shelf)
    }

    /// 无可用存储（非交互式运行）
    pub fn detached() -> Self {
        Self::new(StoreAdapter::unavailable())
    }

    pub fn store(&self) -> &StoreAdapter {
        &self.store
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// 开始游玩：记录到最近游玩，返回游戏入口地址
    pub fn play<'a>(&self, game: &'a Game) -> ShelfResult<Option<&'a str>> {
        self.recents.record_play(game)?;
        Ok(game.url())
    }

    /// 最近游玩的游戏（最近的在前）
    pub fn recently_played(&self) -> ShelfResult<Vec<Game>> {
        Ok(most_recent_first(self.recents.list_recents()?)
            .into_iter()
            .map(|entry| entry.game)
            .collect())
    }

    /// 为要展示的游戏附上收藏状态（只读取一次收藏账本）
    pub fn with_favourite_status<'a>(
        &self,
        games: impl IntoIterator<Item = &'a Game>,
    ) -> ShelfResult<Vec<(&'a Game, bool)>> {
        self.favourites.favourite_status(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn game(code: &str) -> Game {
        serde_json::from_value(json!({
            "code": code,
            "url": format!("https://play.example.com/{}", code),
        }))
        .unwrap()
    }

    #[test]
    fn ledgers_share_one_store() {
        let shelf = Shelf::new(StoreAdapter::new(MemoryStore::new()));
        let a = game("A");

        shelf.favourites.add_favourite(&a).unwrap();
        assert_eq!(shelf.play(&a).unwrap(), Some("https://play.example.com/A"));
        shelf.settings.set_catalog_url("catalog.json".to_string()).unwrap();

        let reopened = Shelf::new(shelf.store().clone());
        assert!(reopened.favourites.is_favourite(&a).unwrap());
        assert_eq!(reopened.recently_played().unwrap(), vec![a]);
        assert_eq!(
            reopened.settings.get_catalog_url().unwrap().as_deref(),
            Some("catalog.json")
        );
    }

    #[test]
    fn recently_played_is_most_recent_first() {
        let shelf = Shelf::new(StoreAdapter::new(MemoryStore::new()));
        shelf.recents.record_play_at(&game("A"), 100).unwrap();
        shelf.recents.record_play_at(&game("B"), 300).unwrap();
        shelf.recents.record_play_at(&game("C"), 200).unwrap();

        let codes: Vec<_> = shelf
            .recently_played()
            .unwrap()
            .into_iter()
            .filter_map(|g| g.code)
            .collect();
        assert_eq!(codes, ["B", "C", "A"]);
    }

    #[test]
    fn favourite_status_follows_display_order() {
        let shelf = Shelf::new(StoreAdapter::new(MemoryStore::new()));
        let shown = [game("A"), game("B"), Game::default()];
        shelf.favourites.add_favourite(&shown[1]).unwrap();

        let marked: Vec<bool> = shelf
            .with_favourite_status(&shown)
            .unwrap()
            .into_iter()
            .map(|(_, favourite)| favourite)
            .collect();
        assert_eq!(marked, [false, true, false]);
    }

    #[test]
    fn detached_shelf_plays_without_recording() {
        let shelf = Shelf::detached();
        let a = game("A");

        assert!(shelf.play(&a).unwrap().is_some());
        assert!(shelf.recently_played().unwrap().is_empty());
        assert!(shelf.store_path().is_none());
    }
}
