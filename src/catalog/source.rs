use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use super::Catalog;
use crate::error::CatalogError;

/// 远程目录请求超时
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// 游戏目录来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// 本地 JSON 文件
    File(PathBuf),
    /// http(s) 接口
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = Infallible;

    /// 以 http:// 或 https:// 开头的视为接口地址，其余一律视为文件路径
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Url(url)),
            _ => Ok(Self::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

impl CatalogSource {
    /// 加载游戏目录
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            Self::File(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Catalog::from_json(&raw)?
            }
            Self::Url(url) => fetch_catalog(url).await?,
        };

        log::info!("已加载游戏目录 {}: {} 个游戏", self, catalog.len());
        Ok(catalog)
    }
}

/// 请求远程游戏目录（不缓存）
async fn fetch_catalog(url: &Url) -> Result<Catalog, CatalogError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        log::error!("请求游戏目录失败 {}: {}", url, status);
        return Err(CatalogError::Status(status));
    }

    let raw = response.text().await?;
    Catalog::from_json(&raw)
}
