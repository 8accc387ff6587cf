use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分类 ID → 名称 对照表
///
/// API `/api/questions/categoryValues` 直接返回 `{"5": "Math"}` 形式的对象，
/// 这里按 ID 升序保存，名称查找时先命中的 ID 优先。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLookup {
    entries: BTreeMap<i64, String>,
}

impl CategoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: i64, name: impl Into<String>) {
        self.entries.insert(id, name.into());
    }

    /// 按名称查找分类 ID（忽略大小写，精确匹配）
    ///
    /// 找不到时返回 `None`，不视为错误。
    pub fn resolve(&self, name: &str) -> Option<i64> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|(_, value)| value.to_lowercase() == wanted)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i64, String)> for CategoryLookup {
    fn from_iter<T: IntoIterator<Item = (i64, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
