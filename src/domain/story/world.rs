//! 世界观提取
//!
//! 从 AI 生成的世界描述散文中启发式提取类型化字段。只做关键词
//! 与模式匹配，不保证语义正确；raw_content 始终保留原文兜底。

use super::buckets::{classify_first_match, contains_any, matching_themes, KeywordBucket};
use super::schema::WorldData;

/// 题材桶，按优先级排列（首个命中生效）
const GENRE_BUCKETS: [KeywordBucket; 4] = [
    KeywordBucket {
        label: "Dystopian/Post-Apocalyptic",
        keywords: &["dystopian", "post-apocalyptic", "wasteland"],
    },
    KeywordBucket {
        label: "Fantasy",
        keywords: &["fantasy", "magic", "wizard", "spell"],
    },
    KeywordBucket {
        label: "Science Fiction",
        keywords: &["sci-fi", "science fiction", "space", "future", "technology"],
    },
    KeywordBucket {
        label: "Horror",
        keywords: &["horror", "terror", "nightmare", "fear"],
    },
];

/// 时代桶，按优先级排列
const TIME_PERIOD_BUCKETS: [KeywordBucket; 4] = [
    KeywordBucket {
        label: "Medieval",
        keywords: &["medieval", "middle ages", "knights", "castles"],
    },
    KeywordBucket {
        label: "Modern",
        keywords: &["modern", "contemporary", "present day"],
    },
    KeywordBucket {
        label: "Future",
        keywords: &["future", "futuristic", "advanced", "space age"],
    },
    KeywordBucket {
        label: "Post-Apocalyptic",
        keywords: &["post-apocalyptic", "after the", "ruins", "wasteland"],
    },
];

/// 魔法体系存在性关键词
const MAGIC_KEYWORDS: [&str; 6] = ["magic", "spell", "wizard", "mage", "enchant", "arcane"];

/// 主题桶：逐个独立测试，收集所有命中者
const WORLD_THEMES: [KeywordBucket; 5] = [
    KeywordBucket {
        label: "Survival",
        keywords: &["survival"],
    },
    KeywordBucket {
        label: "Power and Corruption",
        keywords: &["power", "corruption", "authority"],
    },
    KeywordBucket {
        label: "Good vs Evil",
        keywords: &["good", "evil", "moral", "ethics"],
    },
    KeywordBucket {
        label: "Sacrifice and Loss",
        keywords: &["sacrifice", "loss", "death"],
    },
    KeywordBucket {
        label: "Technology and Progress",
        keywords: &["technology", "progress", "advancement"],
    },
];

/// 背景摘要候选行的最小长度与截断长度
const SUMMARY_MIN_CHARS: usize = 50;
const SUMMARY_MAX_CHARS: usize = 200;

/// 解析世界观文本为类型化记录
///
/// 纯文本分类，永不失败：无信号的字段保持占位默认值
pub fn parse_world_text(title: &str, ai_content: &str) -> WorldData {
    let mut world = WorldData::from_ai_text(title, ai_content);
    let lower = ai_content.to_lowercase();

    if let Some(genre) = classify_first_match(&lower, &GENRE_BUCKETS) {
        world.genre = genre.to_string();
    }

    if let Some(period) = classify_first_match(&lower, &TIME_PERIOD_BUCKETS) {
        world.time_period = period.to_string();
    }

    if contains_any(&lower, &MAGIC_KEYWORDS) {
        world.magic_system.exists = true;
        world.magic_system.kind = Some("Unknown magic system".to_string());
    }

    world.themes = matching_themes(&lower, &WORLD_THEMES);

    // 背景摘要：第一个足够长、非列表/标题的散文行，超长截断
    for line in ai_content.lines() {
        let clean = line.trim();
        if clean.chars().count() > SUMMARY_MIN_CHARS
            && !clean.starts_with('*')
            && !clean.starts_with('#')
        {
            world.setting_summary = if clean.chars().count() > SUMMARY_MAX_CHARS {
                let truncated: String = clean.chars().take(SUMMARY_MAX_CHARS).collect();
                format!("{}...", truncated)
            } else {
                clean.to_string()
            };
            break;
        }
    }

    tracing::debug!(
        genre = %world.genre,
        time_period = %world.time_period,
        theme_count = world.themes.len(),
        "World text parsed"
    );

    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_priority_order_not_text_order() {
        // "space" 出现在 "magic" 之前，但 Fantasy 桶的优先级更高
        let world = parse_world_text("W", "a tale of space travel and ancient magic");
        assert_eq!(world.genre, "Fantasy");
    }

    #[test]
    fn test_dystopian_outranks_everything() {
        let world = parse_world_text("W", "a dystopian future with magic");
        assert_eq!(world.genre, "Dystopian/Post-Apocalyptic");
    }

    #[test]
    fn test_no_genre_signal_keeps_placeholder() {
        let world = parse_world_text("W", "a quiet pastoral countryside");
        assert_eq!(world.genre, "To be determined");
    }

    #[test]
    fn test_time_period_detection() {
        let world = parse_world_text("W", "knights rode between castles");
        assert_eq!(world.time_period, "Medieval");
    }

    #[test]
    fn test_magic_system_presence() {
        let world = parse_world_text("W", "the arcane arts are forbidden");
        assert!(world.magic_system.exists);
        assert_eq!(world.magic_system.kind.as_deref(), Some("Unknown magic system"));
    }

    #[test]
    fn test_all_matching_themes_collected() {
        let world = parse_world_text("W", "survival against corruption and loss");
        assert_eq!(
            world.themes,
            vec![
                "Survival".to_string(),
                "Power and Corruption".to_string(),
                "Sacrifice and Loss".to_string()
            ]
        );
    }

    #[test]
    fn test_setting_summary_skips_headers_and_bullets() {
        let text = "# World Overview That Is Long Enough To Pass The Length Check\n* a bullet line that is also definitely long enough to pass\nThe realm of Eldoria stretches across seven kingdoms under one sky.";
        let world = parse_world_text("W", text);
        assert!(world.setting_summary.starts_with("The realm of Eldoria"));
    }

    #[test]
    fn test_setting_summary_truncated_with_ellipsis() {
        let long_line = "x".repeat(260);
        let world = parse_world_text("W", &long_line);
        assert_eq!(world.setting_summary.chars().count(), 203);
        assert!(world.setting_summary.ends_with("..."));
    }

    #[test]
    fn test_raw_content_is_verbatim_input() {
        let text = "some world prose";
        let world = parse_world_text("Title", text);
        assert_eq!(world.raw_content, text);
        assert_eq!(world.title, "Title");
    }
}
