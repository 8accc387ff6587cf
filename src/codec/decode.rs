use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"));

/// 解码后的一行单元格
pub type TabularRow = Vec<String>;

/// 默认分隔符
pub const DEFAULT_DELIMITER: char = ',';

/// 按默认分隔符解码 CSV 文本
pub fn decode(text: &str) -> Vec<TabularRow> {
    decode_with_delimiter(text, DEFAULT_DELIMITER)
}

/// 解码 CSV 文本
///
/// 混合换行符都可以；去掉首尾空白后为空的行直接跳过。
/// 不做任何结构校验，也从不失败。
pub fn decode_with_delimiter(text: &str, delimiter: char) -> Vec<TabularRow> {
    LINE_BREAK
        .split(text)
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_fields(line, delimiter))
        .collect()
}

/// 单遍扫描拆分一行
///
/// 引号切换"引号内"状态；引号内连续两个引号表示一个字面引号；
/// 分隔符只在引号外结束当前字段。
fn split_fields(line: &str, delimiter: char) -> TabularRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if inside_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                inside_quotes = !inside_quotes;
            }
        } else if ch == delimiter && !inside_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    // 最后一个字段总是追加
    fields.push(current);
    fields
}
