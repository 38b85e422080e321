use parking_lot::Mutex;

use super::FAVOURITES_KEY;
use crate::entity::prelude::*;
use crate::error::ShelfResult;
use crate::store::StoreAdapter;

/// 收藏账本
///
/// 新收藏的游戏插入到列表头部。添加时不检查是否已收藏，重复添加会产生重复记录；
/// 移除时会删除所有相同 code 的记录。
#[derive(Debug)]
pub struct FavouritesLedger {
    store: StoreAdapter,
    // 同一个账本实例上的修改互斥，跨进程仍然是最后写入者胜出
    write_lock: Mutex<()>,
}

impl FavouritesLedger {
    pub fn new(store: StoreAdapter) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// 添加收藏
    pub fn add_favourite(&self, game: &Game) -> ShelfResult<()> {
        let _guard = self.write_lock.lock();

        let mut favourites = self.list_favourites()?;
        favourites.insert(0, game.clone());
        self.store.write_json(FAVOURITES_KEY, &favourites)?;

        log::debug!("已添加收藏: {:?}", game.code());
        Ok(())
    }

    /// 移除收藏（所有相同 code 的记录）
    pub fn remove_favourite(&self, game: &Game) -> ShelfResult<()> {
        let _guard = self.write_lock.lock();

        let mut favourites = self.list_favourites()?;
        favourites.retain(|favourite| !favourite.same_code(game));
        self.store.write_json(FAVOURITES_KEY, &favourites)?;

        log::debug!("已移除收藏: {:?}", game.code());
        Ok(())
    }

    /// 获取收藏列表（存储中没有时为空）
    pub fn list_favourites(&self) -> ShelfResult<Vec<Game>> {
        Ok(self.store.read_json(FAVOURITES_KEY)?.unwrap_or_default())
    }

    /// 检查游戏是否已收藏
    pub fn is_favourite(&self, game: &Game) -> ShelfResult<bool> {
        Ok(self
            .list_favourites()?
            .iter()
            .any(|favourite| favourite.same_code(game)))
    }

    /// 切换收藏状态，返回切换后的状态
    pub fn toggle_favourite(&self, game: &Game) -> ShelfResult<bool> {
        let _guard = self.write_lock.lock();

        let mut favourites = self.list_favourites()?;
        let was_favourite = favourites.iter().any(|favourite| favourite.same_code(game));
        if was_favourite {
            favourites.retain(|favourite| !favourite.same_code(game));
        } else {
            favourites.insert(0, game.clone());
        }
        self.store.write_json(FAVOURITES_KEY, &favourites)?;

        log::debug!("切换收藏状态: {:?} -> {}", game.code(), !was_favourite);
        Ok(!was_favourite)
    }

    /// 批量获取收藏状态（只读取一次存储）
    ///
    /// 保持传入顺序；重复收藏只算一次。
    pub fn favourite_status<'a>(
        &self,
        games: impl IntoIterator<Item = &'a Game>,
    ) -> ShelfResult<Vec<(&'a Game, bool)>> {
        let favourites = self.list_favourites()?;

        Ok(games
            .into_iter()
            .map(|game| {
                let is_favourite = favourites.iter().any(|favourite| favourite.same_code(game));
                (game, is_favourite)
            })
            .collect())
    }
}
