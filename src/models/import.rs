use crate::models::record::QuestionOptions;
use serde::{Deserialize, Serialize};

/// 从 CSV 行映射出的待导入题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCandidate {
    pub question_text: String,
    #[serde(flatten)]
    pub options: QuestionOptions,
    pub answer: String,
    pub correct_score: f64,
    pub incorrect_score: f64,
    pub lang: String,
    /// 分类 ID，名称无法解析时为 `None`
    pub category: Option<i64>,
}

/// 题目的流程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionStatus {
    Created,
}

/// 题目图形数据的表示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    #[serde(rename = "SVG")]
    Svg,
}

/// `POST /api/questions` 的请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    #[serde(flatten)]
    pub question: ImportCandidate,
    /// 所属题集
    pub set: i64,
    pub updated_by: Option<String>,
    pub shape_type: ShapeType,
    pub status: QuestionStatus,
}

impl CreateQuestionPayload {
    pub fn new(question: ImportCandidate, set: i64, updated_by: Option<String>) -> Self {
        Self {
            question,
            set,
            updated_by,
            shape_type: ShapeType::Svg,
            status: QuestionStatus::Created,
        }
    }
}
