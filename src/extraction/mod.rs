//! 文本题目抽取
//!
//! - `segmenter` - 按编号切分题块（仅用于估算数量）
//! - `matcher` - 全文模式匹配，产生 `ExtractedRecord`

pub mod matcher;
pub mod segmenter;

pub use matcher::extract_records;
pub use segmenter::{segment_blocks, Blocks};
