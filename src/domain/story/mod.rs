//! Story Context - 故事设定上下文
//!
//! 把 AI 生成的设定散文（世界观 / 角色表 / 故事大纲）分类为
//! 类型化记录。只做关键词与模式匹配，提取结果是尽力而为的
//! 启发式，raw_content 始终保留原文作为权威兜底。

mod buckets;
mod characters;
mod outline_data;
mod schema;
mod world;

pub use buckets::{classify_first_match, contains_any, matching_themes, KeywordBucket};
pub use characters::{lex_character_sections, parse_characters_text, SectionKind, SectionToken};
pub use outline_data::parse_outline_text;
pub use schema::{
    Character, CharacterImportance, CharacterRelationship, CharacterRole, CharactersData,
    ChapterOutline, MagicSystem, OutlineData, PlotOutline, Society, StoryStructure, Technology,
    WorldData,
};
pub use world::parse_world_text;
