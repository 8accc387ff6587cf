//! 登录会话
//!
//! 登录成功时创建，登出时销毁；需要用户身份的地方显式传入。

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// 用户可访问的资源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry {
    pub resource_type: String,
    pub resource_path: String,
}

/// 已登录会话
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    access: Vec<AccessEntry>,
}

impl Session {
    pub fn new(username: impl Into<String>, access: Vec<AccessEntry>) -> Self {
        Self {
            username: username.into(),
            access,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn access(&self) -> &[AccessEntry] {
        &self.access
    }
}

/// 登录接口要求的密码摘要（SHA-1 十六进制小写）
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha1::digest(password.as_bytes()))
}
