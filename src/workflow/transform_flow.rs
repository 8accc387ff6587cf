//! 文本 → CSV 转换流程
//!
//! 流程顺序：
//! 1. 切分题块（仅记录数量）
//! 2. 全文模式匹配
//! 3. 编码为 CSV，生成下载文件

use crate::codec::{encode_records, CSV_MIME};
use crate::error::{AppError, AppResult, ParseError};
use crate::extraction::{extract_records, segment_blocks};
use crate::models::record::ExtractedRecord;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// 下载文件后缀
const TRANSFORMED_SUFFIX: &str = "_qa_transformed.csv";

/// 转换生成的 CSV 下载文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl CsvDownload {
    /// 写入目录，返回完整路径
    pub async fn save_to(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(&self.file_name);

        fs::write(&path, &self.bytes)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}

/// 转换结果
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub records: Vec<ExtractedRecord>,
    pub download: CsvDownload,
}

/// 把文档文本转换为 CSV
///
/// `base_name` 为原文件去掉扩展名后的名字。一道题都没匹配到时返回
/// `ParseError::NoQuestionsFound`。
pub fn transform_text(text: &str, base_name: &str) -> AppResult<TransformOutcome> {
    info!("🔍 正在解析题目... (长度: {})", text.len());

    let block_count = segment_blocks(text).count();
    debug!("切分出 {} 个候选题块", block_count);

    let records = extract_records(text);
    if records.is_empty() {
        return Err(ParseError::NoQuestionsFound.into());
    }

    info!("✓ 匹配到 {} 道题目 (候选题块 {})", records.len(), block_count);

    let csv = encode_records(&records);
    let download = CsvDownload {
        file_name: format!("{}{}", base_name, TRANSFORMED_SUFFIX),
        mime: CSV_MIME,
        bytes: csv.into_bytes(),
    };

    Ok(TransformOutcome { records, download })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_names_download_after_source() {
        let text = "1. Q?\nA a\nB b\nC c\nD d\n";
        let outcome = transform_text(text, "chapter1").unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.download.file_name, "chapter1_qa_transformed.csv");
        assert_eq!(outcome.download.mime, "text/csv;charset=utf-8");

        let csv = String::from_utf8(outcome.download.bytes).unwrap();
        assert_eq!(
            csv,
            "ID,questionText,optA,optB,optC,optD,answer\n1,\"Q?\",\"a\",\"b\",\"c\",\"d\",\"\""
        );
    }

    #[test]
    fn test_no_questions_is_reported() {
        let err = transform_text("nothing to see", "empty").unwrap_err();
        assert!(matches!(err, AppError::Parse(ParseError::NoQuestionsFound)));
    }

    #[tokio::test]
    async fn test_save_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = transform_text("1. Q?\nA a\nB b\nC c\nD d", "doc").unwrap();

        let path = outcome.download.save_to(dir.path()).await.unwrap();

        assert!(path.ends_with("doc_qa_transformed.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), outcome.download.bytes);
    }
}
