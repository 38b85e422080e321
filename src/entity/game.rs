//! 游戏记录 JSON 结构体
//!
//! 游戏记录来自外部目录接口，账本只依赖 `code` 作为键。
//! 其余字段对持久化层是不透明的，全部原样保留在 `extra` 中，
//! 因此记录写回存储时保持原有形状（数值类型、字符串或对象都不会被改写）。
//! 展示用的字段通过访问方法按需读取，类型不符时视为缺失。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 多语言字段中使用的语言
const DISPLAY_LANGUAGE: &str = "en";

/// 游戏目录记录
///
/// 注意：
/// - `code` 缺失的记录彼此视为同一个键（都是 `None`），属于数据质量问题，不做处理
/// - 不做校验和规范化，给什么存什么
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Game {
    /// 游戏唯一标识
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// 其余全部字段（name、url、categories、rating、assets 等）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Game {
    /// 仅包含 code 的记录，足够用于移除收藏等按键匹配的操作
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// 两条记录是否指向同一个游戏（按 code 比较）
    pub fn same_code(&self, other: &Game) -> bool {
        self.code == other.code
    }

    /// 游戏入口地址
    pub fn url(&self) -> Option<&str> {
        self.extra.get("url").and_then(Value::as_str)
    }

    /// 名称：`{ "en": ... }` 或纯字符串，缺失时退回 code
    pub fn display_name(&self) -> &str {
        self.extra
            .get("name")
            .and_then(localized)
            .and_then(Value::as_str)
            .or(self.code.as_deref())
            .unwrap_or_default()
    }

    /// 分类列表：`{ "en": [...] }` 或纯数组，忽略非字符串元素
    pub fn category_names(&self) -> Vec<&str> {
        self.extra
            .get("categories")
            .and_then(localized)
            .and_then(Value::as_array)
            .map(|categories| categories.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// 主分类（分类列表的第一个）
    pub fn primary_category(&self) -> Option<&str> {
        self.category_names().first().copied()
    }

    /// 评分：数字或可解析为数字的字符串
    pub fn rating(&self) -> Option<f64> {
        match self.extra.get("rating")? {
            Value::Number(rating) => rating.as_f64(),
            Value::String(rating) => rating.trim().parse().ok(),
            _ => None,
        }
    }
}

/// 多语言对象取展示语言的值，其他形状原样返回
fn localized(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(translations) => translations.get(DISPLAY_LANGUAGE),
        other => Some(other),
    }
}
