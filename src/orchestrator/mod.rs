//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令分发、会话生命周期)
//!     ↓
//! workflow (transform_flow / import_flow)
//!     ↓
//! services + extraction + codec (规范化、上传检查、抽取、编解码)
//!     ↓
//! clients (题库 API)
//! ```

pub mod app;

pub use app::App;
