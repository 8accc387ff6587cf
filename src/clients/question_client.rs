//! 题库 API 客户端
//!
//! 封装所有与题库 REST API 相关的调用逻辑

use crate::clients::session::{hash_password, AccessEntry, Session};
use crate::config::Config;
use crate::error::{ApiError, AppResult, SessionError};
use crate::models::category::CategoryLookup;
use crate::models::import::CreateQuestionPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{debug, info};

/// "创建题目" 协作方
///
/// 导入流程只依赖这个能力，便于替换为内存实现。
#[async_trait]
pub trait QuestionSink {
    async fn create_question(&self, payload: &CreateQuestionPayload) -> AppResult<()>;
}

/// 题库 API 客户端
pub struct QuestionClient {
    http: Client,
    base_url: String,
    /// 当前登录的用户名，登出后清空
    signed_in: Mutex<Option<String>>,
}

impl QuestionClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            signed_in: Mutex::new(None),
        }
    }

    /// 当前登录的用户名
    pub fn signed_in_user(&self) -> Option<String> {
        self.signed_in.lock().ok().and_then(|user| user.clone())
    }

    fn set_signed_in(&self, user: Option<String>) {
        if let Ok(mut current) = self.signed_in.lock() {
            *current = user;
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 登录
    ///
    /// 密码以 SHA-1 摘要作为查询参数发送；成功时返回的访问列表存入会话。
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let endpoint = "/api/auth/login";
        let hashed = hash_password(password);

        debug!("登录用户: {}", username);

        let response = self
            .http
            .get(self.url(endpoint))
            .query(&[("username", username), ("password", hashed.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::LoginFailed {
                username: username.to_string(),
                message: extract_message(&body)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            }
            .into());
        }

        let access: Vec<AccessEntry> = response.json().await?;
        info!("✓ 登录成功: {} ({} 项权限)", username, access.len());
        self.set_signed_in(Some(username.to_string()));

        Ok(Session::new(username, access))
    }

    /// 登出，会话随之销毁
    pub fn logout(&self, session: Session) {
        self.set_signed_in(None);
        info!("👋 已登出: {}", session.username());
        drop(session);
    }

    /// 获取分类 ID → 名称 对照表
    pub async fn category_values(&self) -> AppResult<CategoryLookup> {
        self.get_json("/api/questions/categoryValues").await
    }

    /// 获取题集 ID → 名称 对照表
    pub async fn set_values(&self) -> AppResult<BTreeMap<i64, String>> {
        self.get_json("/api/questions/setValues").await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        let response = self.http.get(self.url(endpoint)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadResponse {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl QuestionSink for QuestionClient {
    async fn create_question(&self, payload: &CreateQuestionPayload) -> AppResult<()> {
        let endpoint = "/api/questions";

        debug!("创建题目 Payload: {}", serde_json::to_string(payload)?);

        let response = self.http.post(self.url(endpoint)).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadResponse {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        Ok(())
    }
}

/// 从错误响应体中取出 `message` 字段
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
