//! Story Context - 结构化记录类型
//!
//! 世界观 / 角色 / 故事大纲的类型化记录。所有结构化字段都是
//! *派生*出来的，raw_content 才是权威数据：在创建时填入一次
//! 原始文本，之后不再变更，作为无损兜底。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 魔法体系
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MagicSystem {
    #[serde(default)]
    pub exists: bool,
    /// 体系类型（"elemental"、"ritual"、"divine" 等）
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub users: Vec<String>,
}

/// 技术水平
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    /// "stone age" / "medieval" / "modern" / "futuristic" / "post-apocalyptic"
    #[serde(default = "default_tech_level")]
    pub level: String,
    #[serde(default)]
    pub notable_tech: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub lost_tech: Vec<String>,
}

fn default_tech_level() -> String {
    "modern".to_string()
}

impl Default for Technology {
    fn default() -> Self {
        Self {
            level: default_tech_level(),
            notable_tech: Vec::new(),
            restrictions: Vec::new(),
            lost_tech: Vec::new(),
        }
    }
}

/// 社会结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Society {
    #[serde(default)]
    pub government: Option<String>,
    #[serde(default)]
    pub social_structure: Vec<String>,
    #[serde(default)]
    pub culture: Vec<String>,
    #[serde(default)]
    pub beliefs: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
}

/// 世界观记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldData {
    pub title: String,
    pub genre: String,
    pub setting_summary: String,
    pub time_period: String,

    #[serde(default)]
    pub geography: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub magic_system: MagicSystem,
    #[serde(default)]
    pub technology: Technology,
    #[serde(default)]
    pub society: Society,

    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub atmosphere: String,

    pub generated_at: DateTime<Utc>,
    /// 原始 AI 文本，创建时填入一次，不再变更
    pub raw_content: String,
}

impl WorldData {
    /// 以中性占位值初始化，raw_content 即为输入原文
    pub fn from_ai_text(title: impl Into<String>, ai_content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: "To be determined".to_string(),
            setting_summary: "Extracted from AI analysis".to_string(),
            time_period: "To be determined".to_string(),
            geography: serde_json::Map::new(),
            magic_system: MagicSystem::default(),
            technology: Technology::default(),
            society: Society::default(),
            themes: Vec::new(),
            atmosphere: String::new(),
            generated_at: Utc::now(),
            raw_content: ai_content.into(),
        }
    }
}

/// 角色定位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterRole {
    Protagonist,
    Antagonist,
    #[default]
    Supporting,
}

/// 角色重要性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterImportance {
    Main,
    #[default]
    Secondary,
    Minor,
}

/// 角色间关系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRelationship {
    pub character: String,
    /// "friend" / "enemy" / "family" / "mentor" 等
    pub relationship_type: String,
    pub description: String,
}

/// 角色记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub role: CharacterRole,
    #[serde(default)]
    pub importance: CharacterImportance,

    #[serde(default)]
    pub physical_description: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub motivations: Vec<String>,

    #[serde(default)]
    pub relationships: Vec<CharacterRelationship>,
    #[serde(default)]
    pub character_arc: String,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl Character {
    /// 仅有名字、其余取默认值的角色
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: CharacterRole::default(),
            importance: CharacterImportance::default(),
            physical_description: String::new(),
            background: String::new(),
            personality: Vec::new(),
            goals: Vec::new(),
            motivations: Vec::new(),
            relationships: Vec::new(),
            character_arc: String::new(),
            skills: Vec::new(),
            weaknesses: Vec::new(),
        }
    }
}

/// 角色集记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharactersData {
    pub characters: Vec<Character>,
    #[serde(default)]
    pub relationship_summary: String,
    #[serde(default)]
    pub dynamics: Vec<String>,

    pub generated_at: DateTime<Utc>,
    /// 原始 AI 文本，创建时填入一次，不再变更
    pub raw_content: String,
}

impl CharactersData {
    pub fn from_ai_text(ai_content: impl Into<String>) -> Self {
        Self {
            characters: Vec::new(),
            relationship_summary: String::new(),
            dynamics: Vec::new(),
            generated_at: Utc::now(),
            raw_content: ai_content.into(),
        }
    }
}

/// 单章大纲条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterOutline {
    pub chapter_number: u32,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub characters_involved: Vec<String>,
    #[serde(default)]
    pub plot_points: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
}

/// 故事结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryStructure {
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub pacing: String,
    #[serde(default)]
    pub point_of_view: String,
}

fn default_genre() -> String {
    "To be determined".to_string()
}

impl Default for StoryStructure {
    fn default() -> Self {
        Self {
            genre: default_genre(),
            themes: Vec::new(),
            tone: String::new(),
            pacing: String::new(),
            point_of_view: String::new(),
        }
    }
}

/// 情节轮廓（三幕式各阶段）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotOutline {
    #[serde(default)]
    pub beginning: String,
    #[serde(default)]
    pub inciting_incident: String,
    #[serde(default)]
    pub rising_action: String,
    #[serde(default)]
    pub climax: String,
    #[serde(default)]
    pub falling_action: String,
    #[serde(default)]
    pub resolution: String,
}

/// 故事大纲记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineData {
    pub story_structure: StoryStructure,
    pub plot_outline: PlotOutline,
    #[serde(default)]
    pub chapters: Vec<ChapterOutline>,

    #[serde(default)]
    pub character_arcs: Vec<String>,
    #[serde(default)]
    pub plot_threads: Vec<String>,
    #[serde(default)]
    pub major_conflicts: Vec<String>,

    pub generated_at: DateTime<Utc>,
    /// 原始 AI 文本，创建时填入一次，不再变更
    pub raw_content: String,
}

impl OutlineData {
    pub fn from_ai_text(ai_content: impl Into<String>) -> Self {
        Self {
            story_structure: StoryStructure::default(),
            plot_outline: PlotOutline::default(),
            chapters: Vec::new(),
            character_arcs: Vec::new(),
            plot_threads: Vec::new(),
            major_conflicts: Vec::new(),
            generated_at: Utc::now(),
            raw_content: ai_content.into(),
        }
    }
}
