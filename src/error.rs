use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文本 / 表格解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 批量导入错误
    #[error("导入错误: {0}")]
    Import(#[from] ImportError),
    /// 会话错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
}

/// 解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// 文本中没有匹配到任何题目
    #[error("Could not find any questions in the document content. Check the structure.")]
    NoQuestionsFound,
    /// 表格文本中没有任何有效行
    #[error("表格文件中没有可解析的行")]
    EmptyTabular,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 文件类型不支持
    #[error("只接受 CSV 文件: {name}")]
    UnsupportedType { name: String },
    /// 文件过大
    #[error("文件过大 ({name}): {size} 字节, 上限 {max} 字节")]
    TooLarge { name: String, size: u64, max: u64 },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回错误响应
    #[error("API返回错误响应 ({endpoint}): status={status}, body={body}")]
    BadResponse {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// JSON 解析失败
    #[error("JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 批量导入错误
#[derive(Debug, Error)]
pub enum ImportError {
    /// 没有可提交的题目
    #[error("Please upload a CSV file with questions first.")]
    NothingToImport,
    /// 某道题提交失败，剩余题目全部放弃
    #[error("第 {index} 道题提交失败 (已创建 {created} 道, 剩余放弃): {source}")]
    Aborted {
        index: usize,
        created: usize,
        #[source]
        source: Box<AppError>,
    },
}

/// 会话错误
#[derive(Debug, Error)]
pub enum SessionError {
    /// 登录失败
    #[error("登录失败 ({username}): {message}")]
    LoginFailed { username: String, message: String },
    /// 缺少登录凭据
    #[error("缺少登录凭据: 请设置 API_USERNAME 和 API_PASSWORD")]
    MissingCredentials,
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|url| url.path().to_string())
            .unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
