//! Outline Context - 生成大纲上下文
//!
//! 解析外部生成器输出的大纲文本块，得到逐章写作提示

mod entities;
mod parser;

pub use entities::ChapterPrompt;
pub use parser::parse_outline_to_prompts;
