//! 角色提取
//!
//! 两段式：先用小型词法器把 AI 文本按加粗小节标题切成
//! (小节类型, 小节文本) 令牌序列，再对每个小节独立应用
//! 名字/定位/重要性/性格/目标的子提取规则。识别不出名字的
//! 小节仍会产出角色，名字落到 "Unknown Character"。

use std::sync::LazyLock;

use regex::Regex;

use super::buckets::contains_any;
use super::schema::{Character, CharacterImportance, CharacterRole, CharactersData};

/// 首选小节标题："**Character Profile 1:"
static RE_PROFILE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Character Profile \d+:").unwrap());

/// 备选小节标题："**1.2 Some Name**" 式编号标题
static RE_NUMBERED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\d+\.\d+\s+[\w\s]+\*\*").unwrap());

/// "personality" 关键词到下一个 "goal" 关键词（或小节末尾）的窗口
static RE_PERSONALITY_WINDOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)personality(.*?)(?:goal|$)").unwrap());

/// "goal" 关键词到小节末尾的窗口
static RE_GOAL_WINDOW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)goal(.*)").unwrap());

/// 加粗要点项："- **Brave**" / "* **Loyal**"
static RE_BOLD_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*-]\s*\*\*([^*]+)\*\*").unwrap());

/// 定位关键词表，按优先级排列，首个命中生效
const ROLE_KEYWORDS: [(&[&str], CharacterRole); 2] = [
    (
        &["protagonist", "main character", "hero"],
        CharacterRole::Protagonist,
    ),
    (
        &["antagonist", "villain", "enemy"],
        CharacterRole::Antagonist,
    ),
];

/// 重要性关键词表，按优先级排列
const IMPORTANCE_KEYWORDS: [(&[&str], CharacterImportance); 2] = [
    (
        &["main character", "protagonist"],
        CharacterImportance::Main,
    ),
    (
        &["minor", "background", "brief"],
        CharacterImportance::Minor,
    ),
];

/// 小节类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// "**Character Profile N:" 标题
    Profile,
    /// "**N.N Name**" 编号标题
    Numbered,
}

/// 词法器产出的小节令牌
#[derive(Debug, Clone, Copy)]
pub struct SectionToken<'a> {
    pub kind: SectionKind,
    pub text: &'a str,
}

fn split_sections<'a>(re: &Regex, kind: SectionKind, text: &'a str) -> Vec<SectionToken<'a>> {
    let headers: Vec<(usize, usize)> = re.find_iter(text).map(|m| (m.start(), m.end())).collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, (_, end))| {
            let stop = headers
                .get(i + 1)
                .map(|(start, _)| *start)
                .unwrap_or(text.len());
            SectionToken {
                kind,
                text: &text[*end..stop],
            }
        })
        .collect()
}

/// 把文本切为角色小节令牌；首选标题无命中时回退到编号标题
pub fn lex_character_sections(text: &str) -> Vec<SectionToken<'_>> {
    let sections = split_sections(&RE_PROFILE_HEADER, SectionKind::Profile, text);
    if !sections.is_empty() {
        return sections;
    }
    split_sections(&RE_NUMBERED_HEADER, SectionKind::Numbered, text)
}

/// 从小节前 5 行提取角色名
///
/// 两种写法：整行加粗 "**Kael**"，或 "Name: Kael" 标签行。
/// 提取结果为空时继续尝试后续行。
fn extract_name(section: &str) -> Option<String> {
    for line in section.lines().take(5) {
        let line = line.trim();

        if line.starts_with("**") && line.ends_with("**") {
            let name = line.replace('*', "").trim().to_string();
            if !name.is_empty() {
                return Some(name);
            }
            continue;
        }

        if let Some(idx) = line.rfind("Name:") {
            let name = line[idx + "Name:".len()..].replace('*', "").trim().to_string();
            if !name.is_empty() {
                return Some(name);
            }
        }
    }
    None
}

fn classify_role(section_lower: &str) -> CharacterRole {
    ROLE_KEYWORDS
        .iter()
        .find(|(keywords, _)| contains_any(section_lower, keywords))
        .map(|(_, role)| *role)
        .unwrap_or_default()
}

fn classify_importance(section_lower: &str) -> CharacterImportance {
    IMPORTANCE_KEYWORDS
        .iter()
        .find(|(keywords, _)| contains_any(section_lower, keywords))
        .map(|(_, importance)| *importance)
        .unwrap_or_default()
}

/// 窗口内的加粗要点项
fn bold_items(window: &str) -> Vec<String> {
    RE_BOLD_ITEM
        .captures_iter(window)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// 对单个小节做结构化提取
fn extract_character(section: &str) -> Character {
    let name = extract_name(section).unwrap_or_else(|| "Unknown Character".to_string());
    let lower = section.to_lowercase();

    let mut character = Character::named(name);
    character.role = classify_role(&lower);
    character.importance = classify_importance(&lower);

    if let Some(caps) = RE_PERSONALITY_WINDOW.captures(section) {
        character.personality = bold_items(&caps[1]);
    }
    if let Some(caps) = RE_GOAL_WINDOW.captures(section) {
        character.goals = bold_items(&caps[1]);
    }

    character
}

/// 解析角色文本为类型化记录
///
/// 纯文本分类，永不失败：无小节命中时 characters 为空，
/// raw_content 保留原文兜底
pub fn parse_characters_text(ai_content: &str) -> CharactersData {
    let mut data = CharactersData::from_ai_text(ai_content);

    data.characters = lex_character_sections(ai_content)
        .iter()
        .map(|token| extract_character(token.text))
        .collect();

    if data.characters.len() > 1 {
        data.relationship_summary = format!(
            "Story features {} characters with interconnected relationships",
            data.characters.len()
        );
    }

    tracing::debug!(
        character_count = data.characters.len(),
        "Characters text parsed"
    );

    data
}
