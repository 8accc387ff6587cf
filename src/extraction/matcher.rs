//! 题目模式匹配
//!
//! 在全文中反复匹配如下形状：
//!
//! ```text
//! <编号>. <题干，可跨行>
//! A <选项>
//! B <选项>
//! C <选项>
//! D <选项，直到下一个 "\n<编号>."、"\n1b" 或文本末尾>
//! ```
//!
//! 结束标记不被消费：下一次搜索从 D 选项的末尾开始，
//! 这样紧跟其后的题目编号仍能作为下一道题的起点。

use crate::models::record::{ExtractedRecord, QuestionOptions};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)([0-9]+)\.\s*(.*?)\n\s*A\s*(.*?)\n\s*B\s*(.*?)\n\s*C\s*(.*?)\n\s*D\s*(.*?)(?:\n[0-9]+\.|\n1b|\n?\z)",
    )
    .expect("record pattern is valid")
});

/// 最后一个选项的捕获组序号
const LAST_FIELD_GROUP: usize = 6;

/// 从全文中抽取所有题目，保持原文顺序
///
/// 没有匹配时返回空列表，由调用方决定如何提示用户。
pub fn extract_records(text: &str) -> Vec<ExtractedRecord> {
    let mut records = Vec::new();
    let mut position = 0;

    while position < text.len() {
        let Some(caps) = RECORD_PATTERN.captures_at(text, position) else {
            break;
        };

        let record = record_from_captures(&caps);
        debug!("匹配到题目 {}", record);
        records.push(record);

        // 结束标记只作前瞻，不计入本次匹配
        position = caps
            .get(LAST_FIELD_GROUP)
            .map(|m| m.end())
            .unwrap_or_else(|| caps.get(0).map_or(text.len(), |m| m.end()));
    }

    records
}

fn record_from_captures(caps: &Captures<'_>) -> ExtractedRecord {
    let field = |group: usize| {
        caps.get(group)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    let sequence_number = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok());

    ExtractedRecord::new(
        sequence_number,
        field(2),
        QuestionOptions::new(field(3), field(4), field(5), field(6)),
    )
}
