//! CSV 编解码
//!
//! 导出（下载）与批量导入共用同一种 CSV 格式。

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_with_delimiter, TabularRow, DEFAULT_DELIMITER};
pub use encode::{encode_records, quote_field, EXPORT_HEADER};

/// 下载文件的 MIME 类型
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
