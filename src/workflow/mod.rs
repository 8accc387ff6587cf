pub mod import_ctx;
pub mod import_flow;
pub mod transform_flow;

pub use import_ctx::ImportCtx;
pub use import_flow::{prepare_import, submit_all, ImportReport};
pub use transform_flow::{transform_text, CsvDownload, TransformOutcome};
