//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Manuscript Context: 手稿导入与章节结构化
//! - Outline Context: 生成大纲解析
//! - Story Context: 设定散文的类型化提取

pub mod manuscript;
pub mod outline;
pub mod story;
