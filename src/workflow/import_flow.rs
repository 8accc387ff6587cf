//! CSV 批量导入流程
//!
//! 流程顺序：
//! 1. 解码 CSV（没有任何行视为错误）
//! 2. 规范化为 `ImportCandidate`
//! 3. 逐条提交，等待上一条完成后再提交下一条
//!
//! 任意一条提交失败即放弃剩余题目，已创建的不回滚。

use crate::clients::QuestionSink;
use crate::codec::decode;
use crate::error::{AppResult, ImportError, ParseError};
use crate::models::category::CategoryLookup;
use crate::models::import::{CreateQuestionPayload, ImportCandidate};
use crate::services::ImportNormalizer;
use crate::utils::logging::truncate_text;
use crate::workflow::import_ctx::ImportCtx;
use tracing::{error, info};

/// 导入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// 成功创建的题目数
    pub created: usize,
}

/// 解码并规范化 CSV 文本
pub fn prepare_import(
    text: &str,
    categories: &CategoryLookup,
    default_lang: &str,
) -> AppResult<Vec<ImportCandidate>> {
    let rows = decode(text);
    if rows.is_empty() {
        return Err(ParseError::EmptyTabular.into());
    }

    let candidates = ImportNormalizer::new(categories, default_lang).normalize(&rows);
    let unresolved = candidates.iter().filter(|c| c.category.is_none()).count();

    info!(
        "✓ 解析完成: {} 行 → {} 道题目 (分类未解析 {})",
        rows.len(),
        candidates.len(),
        unresolved
    );

    Ok(candidates)
}

/// 逐条提交题目
pub async fn submit_all<S>(
    sink: &S,
    candidates: Vec<ImportCandidate>,
    ctx: &ImportCtx,
) -> AppResult<ImportReport>
where
    S: QuestionSink + ?Sized,
{
    if candidates.is_empty() {
        return Err(ImportError::NothingToImport.into());
    }

    let total = candidates.len();
    info!("{} 📤 开始提交 {} 道题目", ctx, total);

    let mut created = 0;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let question_index = index + 1;
        info!(
            "{} [{}/{}] {}",
            ctx,
            question_index,
            total,
            truncate_text(&candidate.question_text, 60)
        );

        let payload = CreateQuestionPayload::new(candidate, ctx.set_id, ctx.updated_by.clone());

        if let Err(e) = sink.create_question(&payload).await {
            error!(
                "{} ❌ 第 {} 道题提交失败，放弃剩余 {} 道: {}",
                ctx,
                question_index,
                total - question_index,
                e
            );
            return Err(ImportError::Aborted {
                index: question_index,
                created,
                source: Box::new(e),
            }
            .into());
        }

        created += 1;
    }

    info!("{} ✅ 全部提交完成: {}/{}", ctx, created, total);

    Ok(ImportReport { created })
}
