//! 导入规范化 - 业务能力层
//!
//! 把解码后的 CSV 行按固定列位映射为 `ImportCandidate`

use crate::codec::TabularRow;
use crate::models::category::CategoryLookup;
use crate::models::import::ImportCandidate;
use crate::models::record::QuestionOptions;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 首行首列包含其中之一即视为表头
const HEADER_MARKERS: [&str; 2] = ["questiontext", "question text"];

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

// 列位
const COL_QUESTION: usize = 0;
const COL_OPT_A: usize = 1;
const COL_OPT_B: usize = 2;
const COL_OPT_C: usize = 3;
const COL_OPT_D: usize = 4;
const COL_ANSWER: usize = 5;
const COL_CORRECT_SCORE: usize = 6;
const COL_INCORRECT_SCORE: usize = 7;
const COL_LANG: usize = 8;
const COL_CATEGORY: usize = 9;

/// 导入规范化服务
pub struct ImportNormalizer<'a> {
    categories: &'a CategoryLookup,
    default_lang: String,
}

impl<'a> ImportNormalizer<'a> {
    pub fn new(categories: &'a CategoryLookup, default_lang: impl Into<String>) -> Self {
        Self {
            categories,
            default_lang: default_lang.into(),
        }
    }

    /// 映射所有行，保持输入顺序
    ///
    /// 首行若是表头则跳过；全空白的行跳过。
    pub fn normalize(&self, rows: &[TabularRow]) -> Vec<ImportCandidate> {
        let start = if rows.first().is_some_and(|row| is_header_row(row)) {
            debug!("检测到表头行，跳过");
            1
        } else {
            0
        };

        rows.iter()
            .skip(start)
            .filter(|row| !is_blank_row(row))
            .map(|row| self.map_row(row))
            .collect()
    }

    fn map_row(&self, row: &TabularRow) -> ImportCandidate {
        let lang = match cell(row, COL_LANG) {
            "" => self.default_lang.clone(),
            lang => lang.to_string(),
        };

        let category_name = cell(row, COL_CATEGORY);
        let category = self.categories.resolve(category_name);
        if category.is_none() && !category_name.is_empty() {
            debug!("分类 '{}' 未找到，留空", category_name);
        }

        ImportCandidate {
            question_text: cell(row, COL_QUESTION).to_string(),
            options: QuestionOptions::new(
                cell(row, COL_OPT_A),
                cell(row, COL_OPT_B),
                cell(row, COL_OPT_C),
                cell(row, COL_OPT_D),
            ),
            answer: cell(row, COL_ANSWER).to_string(),
            correct_score: parse_score(cell(row, COL_CORRECT_SCORE)),
            incorrect_score: parse_score(cell(row, COL_INCORRECT_SCORE)),
            lang,
            category,
        }
    }
}

/// 取单元格并去掉首尾空白，缺失时为空串
fn cell(row: &TabularRow, index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or("")
}

fn is_header_row(row: &TabularRow) -> bool {
    let first = row.first().map(|c| c.to_lowercase()).unwrap_or_default();
    HEADER_MARKERS.iter().any(|marker| first.contains(marker))
}

fn is_blank_row(row: &TabularRow) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// 解析分数：取开头的数字部分，缺失或无法解析时为 0
fn parse_score(raw: &str) -> f64 {
    LEADING_NUMBER
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> TabularRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn math_lookup() -> CategoryLookup {
        [(5, "Math".to_string())].into_iter().collect()
    }

    #[test]
    fn test_full_row_mapping() {
        let lookup = math_lookup();
        let normalizer = ImportNormalizer::new(&lookup, "en");
        let rows = vec![row(&[" Q1 ", "a", "b", "c", "d", "a", "1.5", "-0.25", "fr", "math"])];

        let candidates = normalizer.normalize(&rows);

        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.question_text, "Q1");
        assert_eq!(c.options, QuestionOptions::new("a", "b", "c", "d"));
        assert_eq!(c.answer, "a");
        assert_eq!(c.correct_score, 1.5);
        assert_eq!(c.incorrect_score, -0.25);
        assert_eq!(c.lang, "fr");
        assert_eq!(c.category, Some(5));
    }

    #[test]
    fn test_short_row_gets_defaults() {
        let lookup = CategoryLookup::new();
        let normalizer = ImportNormalizer::new(&lookup, "en");

        let candidates = normalizer.normalize(&[row(&["Only a stem"])]);

        let c = &candidates[0];
        assert_eq!(c.options, QuestionOptions::default());
        assert_eq!(c.answer, "");
        assert_eq!(c.correct_score, 0.0);
        assert_eq!(c.incorrect_score, 0.0);
        assert_eq!(c.lang, "en");
        assert_eq!(c.category, None);
    }

    #[test]
    fn test_header_detection_variants() {
        let lookup = CategoryLookup::new();
        let normalizer = ImportNormalizer::new(&lookup, "en");

        for header in ["questionText", "Question Text", "QUESTIONTEXT (required)"] {
            let rows = vec![row(&[header, "optA"]), row(&["Q", "a"])];
            assert_eq!(normalizer.normalize(&rows).len(), 1, "header: {}", header);
        }

        let rows = vec![row(&["Q0", "a"]), row(&["Q1", "a"])];
        assert_eq!(normalizer.normalize(&rows).len(), 2);
    }

    #[test]
    fn test_header_only_checked_on_first_row() {
        let lookup = CategoryLookup::new();
        let normalizer = ImportNormalizer::new(&lookup, "en");
        let rows = vec![row(&["Q0"]), row(&["questionText"])];

        assert_eq!(normalizer.normalize(&rows).len(), 2);
    }

    #[test]
    fn test_blank_rows_skipped() {
        let lookup = CategoryLookup::new();
        let normalizer = ImportNormalizer::new(&lookup, "en");
        let rows = vec![row(&["", " ", ""]), row(&["Q1"]), row(&["  "])];

        let candidates = normalizer.normalize(&rows);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].question_text, "Q1");
    }

    #[test]
    fn test_parse_score_prefix_and_garbage() {
        assert_eq!(parse_score("2"), 2.0);
        assert_eq!(parse_score("2.5pts"), 2.5);
        assert_eq!(parse_score(".5"), 0.5);
        assert_eq!(parse_score("1e2"), 100.0);
        assert_eq!(parse_score("abc"), 0.0);
        assert_eq!(parse_score(""), 0.0);
    }
}
