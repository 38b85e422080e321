use parking_lot::Mutex;

use super::RECENTLY_PLAYED_KEY;
use crate::entity::prelude::*;
use crate::error::ShelfResult;
use crate::store::StoreAdapter;

/// 最近游玩账本
///
/// 按 code 去重：已存在的记录只原地刷新时间戳（位置不变），新游戏追加到末尾。
/// 存储顺序不是时间顺序，展示前需要用 [`most_recent_first`] 排序。
#[derive(Debug)]
pub struct RecencyLedger {
    store: StoreAdapter,
    write_lock: Mutex<()>,
}

impl RecencyLedger {
    pub fn new(store: StoreAdapter) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// 记录一次游玩（当前时间）
    pub fn record_play(&self, game: &Game) -> ShelfResult<()> {
        self.record_play_at(game, chrono::Utc::now().timestamp_millis())
    }

    /// 记录一次游玩（指定 Unix 毫秒时间戳）
    pub fn record_play_at(&self, game: &Game, timestamp: i64) -> ShelfResult<()> {
        let _guard = self.write_lock.lock();

        let mut entries = self.list_recents()?;
        match entries.iter_mut().find(|entry| entry.game.same_code(game)) {
            Some(entry) => entry.timestamp = timestamp,
            None => entries.push(RecencyEntry {
                game: game.clone(),
                timestamp,
            }),
        }
        self.store.write_json(RECENTLY_PLAYED_KEY, &entries)?;

        log::debug!("记录游玩: {:?} @ {}", game.code(), timestamp);
        Ok(())
    }

    /// 获取最近游玩记录（存储顺序）
    pub fn list_recents(&self) -> ShelfResult<Vec<RecencyEntry>> {
        Ok(self.store.read_json(RECENTLY_PLAYED_KEY)?.unwrap_or_default())
    }
}

/// 按时间戳降序排列（时间相同的保持原有顺序）
pub fn most_recent_first(mut entries: Vec<RecencyEntry>) -> Vec<RecencyEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ledger() -> RecencyLedger {
        RecencyLedger::new(StoreAdapter::new(MemoryStore::new()))
    }

    fn codes(entries: &[RecencyEntry]) -> Vec<&str> {
        entries.iter().filter_map(|e| e.game.code()).collect()
    }

    #[test]
    fn fresh_store_has_no_recents() {
        assert!(ledger().list_recents().unwrap().is_empty());
    }

    #[test]
    fn replaying_refreshes_timestamp_only() {
        let ledger = ledger();
        let a = Game::with_code("A");

        for timestamp in [100, 250, 200] {
            ledger.record_play_at(&a, timestamp).unwrap();
        }

        let entries = ledger.list_recents().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, 200);
    }

    #[test]
    fn new_codes_are_appended() {
        let ledger = ledger();
        ledger.record_play_at(&Game::with_code("A"), 100).unwrap();
        ledger.record_play_at(&Game::with_code("B"), 50).unwrap();

        let entries = ledger.list_recents().unwrap();
        assert_eq!(codes(&entries), ["A", "B"]);
    }

    #[test]
    fn refreshed_entry_keeps_its_position() {
        let ledger = ledger();
        ledger.record_play_at(&Game::with_code("A"), 100).unwrap();
        ledger.record_play_at(&Game::with_code("B"), 200).unwrap();
        ledger.record_play_at(&Game::with_code("A"), 300).unwrap();

        let entries = ledger.list_recents().unwrap();
        assert_eq!(codes(&entries), ["A", "B"]);
        assert_eq!(entries[0].timestamp, 300);

        let sorted = most_recent_first(entries);
        assert_eq!(codes(&sorted), ["A", "B"]);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let entry = |code: &str, timestamp| RecencyEntry {
            game: Game::with_code(code),
            timestamp,
        };
        let sorted = most_recent_first(vec![
            entry("A", 10),
            entry("B", 30),
            entry("C", 20),
            entry("D", 30),
        ]);
        assert_eq!(codes(&sorted), ["B", "D", "C", "A"]);
    }

    #[test]
    fn record_play_uses_current_time() {
        let ledger = ledger();
        let before = chrono::Utc::now().timestamp_millis();
        ledger.record_play(&Game::with_code("A")).unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        let timestamp = ledger.list_recents().unwrap()[0].timestamp;
        assert!(before <= timestamp && timestamp <= after);
    }

    #[test]
    fn unavailable_store_is_a_no_op() {
        let ledger = RecencyLedger::new(StoreAdapter::unavailable());
        ledger.record_play(&Game::with_code("A")).unwrap();
        assert!(ledger.list_recents().unwrap().is_empty());
    }
}
