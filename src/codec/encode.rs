use crate::models::record::ExtractedRecord;

/// 导出 CSV 的表头
pub const EXPORT_HEADER: [&str; 7] = [
    "ID",
    "questionText",
    "optA",
    "optB",
    "optC",
    "optD",
    "answer",
];

/// 用双引号包裹字段，内部的双引号加倍
///
/// 无论内容是否包含特殊字符都加引号。
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// 把抽取结果编码为 CSV 文本
///
/// 行之间用 `\n` 连接，末尾不追加换行。编号列不加引号，缺失时为空。
pub fn encode_records(records: &[ExtractedRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(EXPORT_HEADER.join(","));

    for record in records {
        let sequence = record
            .sequence_number
            .map(|n| n.to_string())
            .unwrap_or_default();

        let [a, b, c, d] = record.options.as_array();
        let values = [
            sequence,
            quote_field(&record.body_text),
            quote_field(a),
            quote_field(b),
            quote_field(c),
            quote_field(d),
            quote_field(record.answer_key.as_deref().unwrap_or("")),
        ];

        rows.push(values.join(","));
    }

    rows.join("\n")
}
