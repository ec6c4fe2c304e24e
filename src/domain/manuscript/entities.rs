//! Manuscript Context - Entities

use serde::{Deserialize, Serialize};

/// 章节 - 手稿结构化的基本单位
///
/// 不变量:
/// - chapter_number 从 1 开始，在同一解析结果内唯一
/// - content 为章节正文（可为空，标题行后无正文时）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节编号
    chapter_number: u32,
    /// 章节标题
    title: String,
    /// 章节正文
    content: String,
}

impl Chapter {
    pub fn new(chapter_number: u32, title: String, content: String) -> Result<Self, &'static str> {
        if chapter_number == 0 {
            return Err("章节编号必须从 1 开始");
        }
        Ok(Self {
            chapter_number,
            title,
            content,
        })
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 正文词数（按空白分割）
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
