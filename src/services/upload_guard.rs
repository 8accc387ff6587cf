//! 上传文件检查与读取 - 业务能力层

use crate::error::{AppError, AppResult, FileError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const UTF8_BOM: char = '\u{FEFF}';

/// 一个待处理的上传文件
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: Option<String>,
    pub size: u64,
}

impl UploadFile {
    /// 读取文件元信息
    pub async fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let metadata = fs::metadata(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            mime: guess_mime(&name).map(str::to_string),
            name,
            size: metadata.len(),
        })
    }

    /// 检查是否为可接受的 CSV 上传
    ///
    /// 文件名以 `.csv` 结尾或 MIME 类型包含 `csv` 即可；超过上限则拒绝。
    pub fn validate_csv(&self, max_bytes: u64) -> Result<(), FileError> {
        let is_csv = self.name.to_lowercase().ends_with(".csv")
            || self.mime.as_deref().is_some_and(|m| m.contains("csv"));

        if !is_csv {
            return Err(FileError::UnsupportedType {
                name: self.name.clone(),
            });
        }

        if self.size > max_bytes {
            return Err(FileError::TooLarge {
                name: self.name.clone(),
                size: self.size,
                max: max_bytes,
            });
        }

        Ok(())
    }

    /// 读取为文本，非法 UTF-8 字节以替换字符代替
    ///
    /// 开头的 UTF-8 BOM（Excel 导出的 CSV 常带）会被去掉。
    pub async fn read_text(&self) -> AppResult<String> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| AppError::file_read_failed(self.path.display().to_string(), e))?;

        debug!("读取文件 {} ({} 字节)", self.name, bytes.len());

        let text = String::from_utf8_lossy(&bytes);
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string())
    }

    /// 去掉扩展名后的文件名
    pub fn base_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// 按扩展名推断 MIME 类型
fn guess_mime(name: &str) -> Option<&'static str> {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "csv" => Some("text/csv"),
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
