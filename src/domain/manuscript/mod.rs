//! Manuscript Context - 手稿导入上下文
//!
//! 把导入的长篇手稿文本转为结构化记录：
//! - 章节边界检测（segmenter）
//! - 标题/作者推断（metadata）
//! - 导入基础分析（analysis）

mod aggregate;
mod analysis;
mod entities;
mod metadata;
mod segmenter;
mod value_objects;

pub use aggregate::Manuscript;
pub use analysis::{analyze_manuscript, ImportAnalysis};
pub use entities::Chapter;
pub use metadata::infer_title_author;
pub use segmenter::detect_chapters;
pub use value_objects::{ManuscriptId, TitleAuthor};
