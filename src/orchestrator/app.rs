//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：运行日志文件、API 客户端
//! 2. **会话管理**：需要身份时登录，结束后登出
//! 3. **命令分发**：extract / import / sets
//! 4. **统计输出**：汇总导入结果

use crate::cli::Command;
use crate::clients::{QuestionClient, Session};
use crate::config::Config;
use crate::error::SessionError;
use crate::models::{load_category_file, CategoryLookup};
use crate::services::UploadFile;
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use crate::workflow::{prepare_import, submit_all, transform_text, ImportCtx};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: QuestionClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        let client = QuestionClient::new(&config);

        Ok(Self { config, client })
    }

    /// 执行子命令
    pub async fn run(&self, command: Command) -> Result<()> {
        log_startup(command.name(), &self.config.api_base_url);

        match command {
            Command::Extract { input, output_dir } => {
                let output_dir =
                    output_dir.unwrap_or_else(|| PathBuf::from(&self.config.output_dir));
                self.extract(&input, &output_dir).await
            }
            Command::Import {
                input,
                set,
                categories,
                dry_run,
            } => self.import(&input, set, categories.as_deref(), dry_run).await,
            Command::Sets => self.list_sets().await,
        }
    }

    /// 文本 → CSV
    async fn extract(&self, input: &Path, output_dir: &Path) -> Result<()> {
        let file = UploadFile::open(input).await?;
        let text = file.read_text().await?;

        let outcome = transform_text(&text, &file.base_name())
            .with_context(|| format!("Transformation failed: {}", file.name))?;

        if self.config.verbose_logging {
            for record in &outcome.records {
                info!("  {}", record);
            }
        }

        let path = outcome.download.save_to(output_dir).await?;
        info!("💾 已生成: {} ({} 道题目)", path.display(), outcome.records.len());

        Ok(())
    }

    /// CSV → 逐条创建题目
    ///
    /// 登录后无论导入成功与否都会登出。
    async fn import(
        &self,
        input: &Path,
        set_id: i64,
        categories_file: Option<&Path>,
        dry_run: bool,
    ) -> Result<()> {
        let file = UploadFile::open(input).await?;
        file.validate_csv(self.config.max_upload_bytes)?;
        let text = file.read_text().await?;

        let session = if needs_session(categories_file.is_some(), dry_run) {
            Some(self.login().await?)
        } else {
            None
        };

        let result = self
            .import_text(&file, &text, set_id, categories_file, dry_run, session.as_ref())
            .await;

        if let Some(session) = session {
            self.client.logout(session);
        }

        result
    }

    /// 解析分类、规范化并提交；dry-run 时只做解析
    async fn import_text(
        &self,
        file: &UploadFile,
        text: &str,
        set_id: i64,
        categories_file: Option<&Path>,
        dry_run: bool,
        session: Option<&Session>,
    ) -> Result<()> {
        // 离线分类表不需要登录即可解析
        let categories = match categories_file {
            Some(path) => load_category_file(path).await?,
            None => self.fetch_categories().await?,
        };

        let candidates = prepare_import(text, &categories, &self.config.default_lang)?;
        info!(
            "📄 {} • {} KB • {} questions parsed",
            file.name,
            file.size / 1024,
            candidates.len()
        );

        if dry_run {
            info!("🧪 dry-run: 不提交任何题目");
            return Ok(());
        }

        let Some(session) = session else {
            return Err(SessionError::MissingCredentials.into());
        };

        let total = candidates.len();
        let ctx = ImportCtx::new(set_id, session);
        let report = submit_all(&self.client, candidates, &ctx).await?;
        print_final_stats(report.created, total, &self.config.output_log_file);

        Ok(())
    }

    /// 列出题集
    async fn list_sets(&self) -> Result<()> {
        let session = self.login().await?;
        let result = self.client.set_values().await;
        self.client.logout(session);

        let sets = result?;
        if sets.is_empty() {
            warn!("⚠️ 没有可用的题集");
        }
        for (id, name) in &sets {
            info!("  #{} {}", id, name);
        }

        Ok(())
    }

    async fn login(&self) -> Result<Session> {
        if !self.config.has_credentials() {
            return Err(SessionError::MissingCredentials.into());
        }

        let session = self
            .client
            .login(&self.config.api_username, &self.config.api_password)
            .await?;

        if self.config.verbose_logging {
            for entry in session.access() {
                info!("  🔑 {} {}", entry.resource_type, entry.resource_path);
            }
        }

        Ok(session)
    }

    async fn fetch_categories(&self) -> Result<CategoryLookup> {
        info!("📁 正在获取分类列表...");
        let lookup = self.client.category_values().await?;
        info!("✓ 获取到 {} 个分类", lookup.len());
        Ok(lookup)
    }
}

/// 是否需要登录：在线获取分类或真正提交时需要
fn needs_session(has_categories_file: bool, dry_run: bool) -> bool {
    !has_categories_file || !dry_run
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 本地题库桩：登录成功，其余接口按 `route` 返回
    async fn stub_server(route: fn(&str) -> (u16, &'static str)) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("");

                let (status, body) = if path.starts_with("/api/auth/login") {
                    (200, r#"[{"resourceType": "MENU", "resourcePath": "/upload"}]"#)
                } else {
                    route(path)
                };

                let response = format!(
                    "HTTP/1.1 {} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        format!("http://{}", addr)
    }

    fn app_for(base_url: String, dir: &Path) -> App {
        let config = Config {
            api_base_url: base_url,
            api_username: "alice".to_string(),
            api_password: "secret".to_string(),
            output_log_file: dir.join("import_log.txt").display().to_string(),
            ..Config::default()
        };
        App::initialize(config).unwrap()
    }

    fn import_command(input: PathBuf, categories: Option<PathBuf>, dry_run: bool) -> Command {
        Command::Import {
            input,
            set: 3,
            categories,
            dry_run,
        }
    }

    #[test]
    fn test_session_needed_unless_offline_dry_run() {
        assert!(needs_session(false, false));
        assert!(needs_session(false, true));
        assert!(needs_session(true, false));
        assert!(!needs_session(true, true));
    }

    #[tokio::test]
    async fn test_logout_when_category_fetch_fails() {
        let base_url = stub_server(|_| (500, r#"{"message": "down"}"#)).await;
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bank.csv");
        std::fs::write(&csv, "Q1,a,b,c,d,a,1,0,en,Math\n").unwrap();

        let app = app_for(base_url, dir.path());
        let result = app.run(import_command(csv, None, false)).await;

        assert!(result.is_err());
        assert_eq!(app.client.signed_in_user(), None);
    }

    #[tokio::test]
    async fn test_logout_when_csv_has_no_rows() {
        let base_url = stub_server(|path| match path {
            "/api/questions/categoryValues" => (200, r#"{"5": "Math"}"#),
            _ => (404, "{}"),
        })
        .await;
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("blank.csv");
        std::fs::write(&csv, "\n  \n").unwrap();

        let app = app_for(base_url, dir.path());
        let result = app.run(import_command(csv, None, true)).await;

        assert!(result.is_err());
        assert_eq!(app.client.signed_in_user(), None);
    }

    #[tokio::test]
    async fn test_online_dry_run_submits_nothing() {
        let base_url = stub_server(|path| match path {
            "/api/questions/categoryValues" => (200, r#"{"5": "Math"}"#),
            _ => (500, r#"{"message": "should not be called"}"#),
        })
        .await;
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bank.csv");
        std::fs::write(&csv, "Q1,a,b,c,d,a,1,0,en,Math\n").unwrap();

        let app = app_for(base_url, dir.path());
        app.run(import_command(csv, None, true)).await.unwrap();

        assert_eq!(app.client.signed_in_user(), None);
    }

    #[tokio::test]
    async fn test_offline_dry_run_never_logs_in() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bank.csv");
        std::fs::write(&csv, "Q1,a,b,c,d,a,1,0,en,Math\n").unwrap();
        let categories = dir.path().join("categories.toml");
        std::fs::write(&categories, "[[category]]\nid = 5\nname = \"Math\"\n").unwrap();

        // 无人监听的地址：一旦尝试登录就会失败
        let app = app_for("http://127.0.0.1:9".to_string(), dir.path());
        app.run(import_command(csv, Some(categories), true))
            .await
            .unwrap();

        assert_eq!(app.client.signed_in_user(), None);
    }
}
