use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// 存储文件名
pub const STORE_FILE_NAME: &str = "shelf_store.json";

// 应用标识（决定各平台下的数据目录名）
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "gameshelf";
const APP_NAME: &str = "game-shelf";

/// 默认存储文件路径：当前用户的应用数据目录下
pub fn default_store_path() -> Result<PathBuf, String> {
    let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| "无法确定用户主目录，请使用 --store 指定存储文件".to_string())?;
    Ok(dirs.data_dir().join(STORE_FILE_NAME))
}

/// 解析存储文件路径
///
/// 优先使用用户指定的路径（`--store` 或 `GAME_SHELF_STORE`），否则使用默认位置。
pub fn resolve_store_path(custom: Option<&Path>) -> Result<PathBuf, String> {
    match custom {
        Some(path) if !path.as_os_str().is_empty() => Ok(path.to_path_buf()),
        _ => {
            let path = default_store_path()?;
            log::info!("使用默认存储位置: {}", path.display());
            Ok(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_path_wins() {
        let custom = Path::new("/tmp/shelf/custom.json");
        assert_eq!(resolve_store_path(Some(custom)).unwrap(), custom);
    }

    #[test]
    fn empty_custom_path_falls_back_to_default() {
        // 没有主目录的环境下两者都会失败
        assert_eq!(
            resolve_store_path(Some(Path::new(""))),
            default_store_path()
        );
    }

    #[test]
    fn default_path_is_inside_app_data_dir() {
        if let Ok(path) = default_store_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with(STORE_FILE_NAME));
            let app_dir = path.parent().and_then(Path::to_str).unwrap_or_default();
            assert!(app_dir.contains(APP_ORGANIZATION) || app_dir.contains(APP_NAME));
        }
    }
}
