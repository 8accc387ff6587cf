/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库 API 根地址
    pub api_base_url: String,
    /// 登录用户名
    pub api_username: String,
    /// 登录密码（明文，登录时做 SHA-1）
    pub api_password: String,
    /// CSV 上传文件大小上限（字节）
    pub max_upload_bytes: u64,
    /// 语言列为空时使用的默认语言代码
    pub default_lang: String,
    /// 转换结果 CSV 的输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 运行日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            api_username: String::new(),
            api_password: String::new(),
            max_upload_bytes: 5 * 1024 * 1024,
            default_lang: "en".to_string(),
            output_dir: ".".to_string(),
            verbose_logging: false,
            output_log_file: "import_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            api_username: std::env::var("API_USERNAME").unwrap_or(default.api_username),
            api_password: std::env::var("API_PASSWORD").unwrap_or(default.api_password),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_upload_bytes),
            default_lang: std::env::var("DEFAULT_LANG").unwrap_or(default.default_lang),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 是否配置了登录凭据
    pub fn has_credentials(&self) -> bool {
        !self.api_username.is_empty() && !self.api_password.is_empty()
    }
}
