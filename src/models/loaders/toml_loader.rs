use crate::models::category::CategoryLookup;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 离线分类文件
///
/// ```toml
/// [[category]]
/// id = 5
/// name = "Math"
/// ```
#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    category: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: i64,
    name: String,
}

/// 解析 TOML 格式的分类表
pub fn parse_category_toml(content: &str) -> Result<CategoryLookup> {
    let file: CategoryFile = toml::from_str(content).context("无法解析分类 TOML")?;

    Ok(file
        .category
        .into_iter()
        .map(|entry| (entry.id, entry.name))
        .collect())
}

/// 从 TOML 文件加载分类表，用于不连接 API 的导入
pub async fn load_category_file(path: &Path) -> Result<CategoryLookup> {
    if !path.exists() {
        anyhow::bail!("分类文件不存在: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取分类文件: {}", path.display()))?;

    let lookup = parse_category_toml(&content)
        .with_context(|| format!("无法解析分类文件: {}", path.display()))?;

    tracing::info!(
        "成功加载 {} 个分类: {}",
        lookup.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_toml() {
        let content = r#"
            [[category]]
            id = 5
            name = "Math"

            [[category]]
            id = 8
            name = "Chemistry"
        "#;

        let lookup = parse_category_toml(content).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.resolve("chemistry"), Some(8));
    }

    #[test]
    fn test_empty_file_yields_empty_lookup() {
        let lookup = parse_category_toml("").unwrap();
        assert!(lookup.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = load_category_file(Path::new("does/not/exist.toml")).await;
        assert!(result.is_err());
    }
}
