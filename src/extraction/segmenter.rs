//! 题块切分
//!
//! 按 "数字 + 点 + 空白" 的编号标记把原文切成候选题块。
//! 只用于日志估算题目数量，真正的抽取由 [`super::matcher`] 对全文进行。

use regex::{Matches, Regex};
use std::iter::Peekable;
use std::sync::LazyLock;

static BLOCK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.\s").expect("block marker pattern is valid"));

/// 惰性题块迭代器
///
/// 每个题块从一个编号标记开始，到下一个标记或文本末尾结束。
/// 第一个标记之前的内容不属于任何题块。
pub struct Blocks<'t> {
    text: &'t str,
    markers: Peekable<Matches<'static, 't>>,
}

impl<'t> Iterator for Blocks<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.markers.next()?.start();
        let end = self
            .markers
            .peek()
            .map(|m| m.start())
            .unwrap_or(self.text.len());

        Some(&self.text[start..end])
    }
}

/// 切分题块
///
/// 纯函数：同一输入每次调用都得到相同的序列。
pub fn segment_blocks(text: &str) -> Blocks<'_> {
    Blocks {
        text,
        markers: BLOCK_MARKER.find_iter(text).peekable(),
    }
}
