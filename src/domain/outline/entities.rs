//! Outline Context - Entities

use serde::{Deserialize, Serialize};

/// 章节提示 - 由大纲解析得到的单章写作提示
///
/// 形状与 Chapter 相同，但 prompt 存放大纲要点而非叙事正文；
/// chapter_number 保留大纲中解析到的编号（允许空洞，重复被跳过）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPrompt {
    /// 章节编号（来自大纲文本）
    chapter_number: u32,
    /// 章节标题
    title: String,
    /// 该章的大纲要点
    prompt: String,
}

impl ChapterPrompt {
    pub fn new(chapter_number: u32, title: String, prompt: String) -> Result<Self, &'static str> {
        if chapter_number == 0 {
            return Err("章节编号必须从 1 开始");
        }
        Ok(Self {
            chapter_number,
            title,
            prompt,
        })
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
