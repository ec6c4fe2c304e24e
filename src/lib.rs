//! Scrivel - 手稿与生成文本的结构化内核
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Manuscript Context: 手稿导入（章节分割、标题/作者推断、导入概览）
//! - Outline Context: 生成大纲解析（逐章写作提示）
//! - Story Context: 设定散文提取（世界观 / 角色表 / 故事大纲）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DocumentExtractor）
//! - Commands: CQRS 命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文档抽取适配器（纯文本 + 测试替身）

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ApplicationError, ImportManuscriptHandler, ImportManuscriptResponse, ParseOutlineHandler,
    ParseOutlineResponse, StoryAnalysisHandler,
};
pub use domain::manuscript::{detect_chapters, infer_title_author, Chapter, Manuscript};
pub use domain::outline::{parse_outline_to_prompts, ChapterPrompt};
pub use domain::story::{
    parse_characters_text, parse_outline_text, parse_world_text, CharactersData, OutlineData,
    WorldData,
};
