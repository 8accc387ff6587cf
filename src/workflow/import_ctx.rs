//! 导入上下文
//!
//! 封装"这批题目导入到哪个题集、由谁导入"这一信息

use crate::clients::Session;
use std::fmt::Display;

/// 导入上下文
#[derive(Debug, Clone)]
pub struct ImportCtx {
    /// 目标题集ID
    pub set_id: i64,

    /// 写入 `updatedBy` 的用户名
    pub updated_by: Option<String>,
}

impl ImportCtx {
    /// 以已登录会话创建上下文
    pub fn new(set_id: i64, session: &Session) -> Self {
        Self {
            set_id,
            updated_by: Some(session.username().to_string()),
        }
    }

    /// 不带用户身份的上下文（离线/测试）
    pub fn anonymous(set_id: i64) -> Self {
        Self {
            set_id,
            updated_by: None,
        }
    }
}

impl Display for ImportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题集 #{} 用户 {}]",
            self.set_id,
            self.updated_by.as_deref().unwrap_or("-")
        )
    }
}
