use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// 基于单个 JSON 文件的存储
///
/// 文件内容为 `{ key: 原始字符串 }`。每次读取都重新读文件，每次写入都读取、替换单个键、
/// 再整体原子写回（临时文件 + rename）。多个进程同时写入时以最后一次写入为准。
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// 打开存储文件（文件不存在时视为空存储，首次写入时创建）
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(io::Error::from),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e),
        }
    }

    fn persist(&self, entries: &Entries) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                log::warn!("读取存储文件失败 {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: String) {
        // 读取失败时不写入，避免用空内容覆盖其他键
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!(
                    "存储文件无法解析，放弃写入 {} ({}): {}",
                    key,
                    self.path.display(),
                    e
                );
                return;
            }
        };

        entries.insert(key.to_string(), value);
        if let Err(e) = self.persist(&entries) {
            log::error!("写入存储文件失败 {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("store.json"));

        assert_eq!(store.get("anything"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        let store = FileStore::open(&path);
        store.set("a", "[1]".to_string());
        store.set("b", "[2]".to_string());

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("a").as_deref(), Some("[1]"));
        assert_eq!(reopened.get("b").as_deref(), Some("[2]"));
    }

    #[test]
    fn corrupt_file_is_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("a"), None);

        store.set("a", "[1]".to_string());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }
}
