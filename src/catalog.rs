//! 游戏目录
//!
//! 目录由外部接口提供（`{ "games": [...] }`），这里只负责解析和查询：
//! 按主分类筛选、列出分类、按名称/分类搜索。

pub mod source;

pub use source::CatalogSource;

use serde::{Deserialize, Serialize};

use crate::entity::prelude::*;
use crate::error::CatalogError;

/// 搜索词最少字符数（少于此数不搜索）
pub const MIN_SEARCH_TERM_CHARS: usize = 3;
/// 搜索返回的游戏数量上限
pub const MAX_GAME_RESULTS: usize = 5;
/// 搜索返回的分类数量上限
pub const MAX_CATEGORY_RESULTS: usize = 3;

/// 游戏目录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<Game>,
}

/// 搜索结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    pub games: Vec<&'a Game>,
    pub categories: Vec<&'a str>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty() && self.categories.is_empty()
    }
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// 根据 code 查找游戏
    pub fn find(&self, code: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.code() == Some(code))
    }

    /// 获取主分类等于 `name` 的所有游戏（区分大小写，保持目录顺序）
    pub fn in_category(&self, name: &str) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.primary_category() == Some(name))
            .collect()
    }

    /// 所有主分类（按首次出现顺序去重）
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self.games.iter().filter_map(Game::primary_category) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// 搜索游戏
    ///
    /// 名称或任一分类包含搜索词（不区分大小写）即命中，最多返回 [`MAX_GAME_RESULTS`] 个游戏；
    /// 分类结果取自命中游戏中包含搜索词的分类，去重后最多 [`MAX_CATEGORY_RESULTS`] 个。
    pub fn search(&self, term: &str) -> SearchResults<'_> {
        if term.chars().count() < MIN_SEARCH_TERM_CHARS {
            return SearchResults::default();
        }

        let needle = term.to_lowercase();
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let games: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| {
                matches(game.display_name())
                    || game
                        .category_names()
                        .into_iter()
                        .any(|category| matches(category))
            })
            .take(MAX_GAME_RESULTS)
            .collect();

        let mut categories: Vec<&str> = Vec::new();
        for category in games.iter().flat_map(|game| game.category_names()) {
            if categories.len() == MAX_CATEGORY_RESULTS {
                break;
            }
            if matches(category) && !categories.contains(&category) {
                categories.push(category);
            }
        }

        SearchResults { games, categories }
    }
}
