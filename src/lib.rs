//! # Question Import
//!
//! 把文档中的选择题抽取为结构化记录，并通过 CSV 批量导入题库
//!
//! ## 架构设计
//!
//! ### ① 核心解析（纯函数，无 I/O）
//! - `extraction/` - 题块切分与全文模式匹配
//! - `codec/` - CSV 编码（下载）与解码（导入）
//! - `services/normalizer` - CSV 行 → 待导入题目
//!
//! ### ② 外部协作
//! - `clients/` - 题库 REST API 客户端与登录会话
//! - `services/upload_guard` - 上传文件检查与读取
//!
//! ### ③ 流程层（Workflow）
//! - `transform_flow` - 文本 → CSV 下载文件
//! - `import_flow` - CSV → 逐条创建题目
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 命令分发与会话生命周期

pub mod cli;
pub mod clients;
pub mod codec;
pub mod config;
pub mod error;
pub mod extraction;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{QuestionClient, QuestionSink, Session};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use extraction::extract_records;
pub use models::{CategoryLookup, ExtractedRecord, ImportCandidate, QuestionOptions};
pub use orchestrator::App;
pub use workflow::{prepare_import, submit_all, transform_text, ImportCtx};
