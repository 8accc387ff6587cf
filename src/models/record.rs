use serde::{Deserialize, Serialize};

/// 四个选项，固定顺序 A/B/C/D
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOptions {
    #[serde(rename = "optA")]
    pub a: String,
    #[serde(rename = "optB")]
    pub b: String,
    #[serde(rename = "optC")]
    pub c: String,
    #[serde(rename = "optD")]
    pub d: String,
}

impl QuestionOptions {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// 按 A、B、C、D 顺序返回
    pub fn as_array(&self) -> [&str; 4] {
        [&self.a, &self.b, &self.c, &self.d]
    }
}

/// 从文本中抽取出的一道题
///
/// 只有题干和四个选项全部匹配时才会产生，答案留给人工或后续流程填写。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// 题干前的编号，不保证唯一或连续
    pub sequence_number: Option<u64>,
    /// 题干
    pub body_text: String,
    pub options: QuestionOptions,
    /// 抽取后为空
    pub answer_key: Option<String>,
}

impl ExtractedRecord {
    pub fn new(
        sequence_number: Option<u64>,
        body_text: impl Into<String>,
        options: QuestionOptions,
    ) -> Self {
        Self {
            sequence_number,
            body_text: body_text.into(),
            options,
            answer_key: None,
        }
    }
}

impl std::fmt::Display for ExtractedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview = if self.body_text.chars().count() > 60 {
            self.body_text.chars().take(60).collect::<String>() + "..."
        } else {
            self.body_text.clone()
        };

        match self.sequence_number {
            Some(n) => write!(f, "#{} {}", n, preview),
            None => write!(f, "#? {}", preview),
        }
    }
}
