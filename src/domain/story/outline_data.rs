//! 故事大纲提取
//!
//! 从 AI 生成的大纲散文中提取题材、主题与三幕情节轮廓。
//! 情节阶段用有界正则窗口截取：从阶段关键词起，到下一个
//! 已识别的阶段关键词（或文本末尾）为止。

use std::sync::LazyLock;

use regex::Regex;

use super::buckets::{classify_first_match, matching_themes, KeywordBucket};
use super::schema::OutlineData;

/// 题材桶，按优先级排列（注意与世界观提取的优先级不同：
/// 这里 Science Fiction 先于 Fantasy 测试）
const GENRE_BUCKETS: [KeywordBucket; 4] = [
    KeywordBucket {
        label: "Science Fiction",
        keywords: &["sci-fi", "science fiction", "space", "future"],
    },
    KeywordBucket {
        label: "Fantasy",
        keywords: &["fantasy", "magic", "wizard"],
    },
    KeywordBucket {
        label: "Mystery",
        keywords: &["mystery", "detective", "crime"],
    },
    KeywordBucket {
        label: "Romance",
        keywords: &["romance", "love", "relationship"],
    },
];

/// 主题桶：逐个独立测试，收集所有命中者
const OUTLINE_THEMES: [KeywordBucket; 4] = [
    KeywordBucket {
        label: "Identity",
        keywords: &["identity"],
    },
    KeywordBucket {
        label: "Friendship",
        keywords: &["friendship"],
    },
    KeywordBucket {
        label: "Survival",
        keywords: &["survival"],
    },
    KeywordBucket {
        label: "Power and Corruption",
        keywords: &["power", "corruption"],
    },
];

/// 阶段窗口：从阶段关键词起捕获到下一个阶段关键词或文本末尾；
/// 窗口不能跨越 '*'，在遇到阶段关键词前先遇到 '*' 则放弃提取
static RE_BEGINNING_WINDOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)beginning[:\s]*([^*]+?)(?:middle|end|$)").unwrap());

static RE_MIDDLE_WINDOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)middle[:\s]*([^*]+?)(?:end|climax|$)").unwrap());

static RE_CLIMAX_WINDOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)climax[:\s]*([^*]+?)(?:resolution|end|$)").unwrap());

/// 解析大纲文本为类型化记录
///
/// 纯文本分类，永不失败：无信号的字段保持占位默认值，
/// raw_content 保留原文兜底
pub fn parse_outline_text(ai_content: &str) -> OutlineData {
    let mut outline = OutlineData::from_ai_text(ai_content);
    let lower = ai_content.to_lowercase();

    if let Some(genre) = classify_first_match(&lower, &GENRE_BUCKETS) {
        outline.story_structure.genre = genre.to_string();
    }

    outline.story_structure.themes = matching_themes(&lower, &OUTLINE_THEMES);

    if lower.contains("beginning") {
        if let Some(caps) = RE_BEGINNING_WINDOW.captures(ai_content) {
            outline.plot_outline.beginning = caps[1].trim().to_string();
        }
    }
    if lower.contains("middle") {
        if let Some(caps) = RE_MIDDLE_WINDOW.captures(ai_content) {
            outline.plot_outline.rising_action = caps[1].trim().to_string();
        }
    }
    if lower.contains("climax") {
        if let Some(caps) = RE_CLIMAX_WINDOW.captures(ai_content) {
            outline.plot_outline.climax = caps[1].trim().to_string();
        }
    }

    tracing::debug!(
        genre = %outline.story_structure.genre,
        theme_count = outline.story_structure.themes.len(),
        "Outline text parsed"
    );

    outline
}
