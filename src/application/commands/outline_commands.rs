//! Outline Commands - 生成大纲解析

/// 解析生成大纲命令：把 AI 生成的大纲文本拆为逐章提示词
#[derive(Debug, Clone)]
pub struct ParseOutline {
    pub outline_text: String,
    /// 解析不出任何章节时生成的占位章节数，必须 >= 1
    pub fallback_count: u32,
}
