use parking_lot::Mutex;

use super::SETTINGS_KEY;
use crate::entity::prelude::*;
use crate::error::ShelfResult;
use crate::store::StoreAdapter;

/// 用户设置账本
#[derive(Debug)]
pub struct SettingsLedger {
    store: StoreAdapter,
    write_lock: Mutex<()>,
}

impl SettingsLedger {
    pub fn new(store: StoreAdapter) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// 获取所有设置（未保存过时为默认值）
    pub fn get_settings(&self) -> ShelfResult<Settings> {
        Ok(self.store.read_json(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// 获取游戏目录来源
    pub fn get_catalog_url(&self) -> ShelfResult<Option<String>> {
        Ok(self.get_settings()?.catalog_url)
    }

    /// 设置游戏目录来源
    pub fn set_catalog_url(&self, url: String) -> ShelfResult<()> {
        self.update(|settings| settings.catalog_url = Some(url))
    }

    /// 清除游戏目录来源
    pub fn clear_catalog_url(&self) -> ShelfResult<()> {
        self.update(|settings| settings.catalog_url = None)
    }

    fn update(&self, apply: impl FnOnce(&mut Settings)) -> ShelfResult<()> {
        let _guard = self.write_lock.lock();

        let mut settings = self.get_settings()?;
        apply(&mut settings);
        self.store.write_json(SETTINGS_KEY, &settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn catalog_url_set_and_clear() {
        let store = StoreAdapter::new(MemoryStore::new());
        let settings = SettingsLedger::new(store.clone());
        assert_eq!(settings.get_catalog_url().unwrap(), None);

        settings
            .set_catalog_url("https://example.com/games.json".to_string())
            .unwrap();
        assert_eq!(
            store.get(SETTINGS_KEY).as_deref(),
            Some(r#"{"catalogUrl":"https://example.com/games.json"}"#)
        );

        // 另一个实例读取到同样的值
        let reopened = SettingsLedger::new(store);
        assert_eq!(
            reopened.get_catalog_url().unwrap().as_deref(),
            Some("https://example.com/games.json")
        );

        reopened.clear_catalog_url().unwrap();
        assert_eq!(settings.get_settings().unwrap(), Settings::default());
    }
}
