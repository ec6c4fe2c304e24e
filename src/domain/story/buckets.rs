//! 关键词桶分类
//!
//! 把"第一个命中的分支生效"的分类逻辑做成显式的有序数据表：
//! 每个桶是 (标签, 触发关键词集)，按表内顺序测试。命中多个桶的
//! 输入由优先级顺序裁决，与关键词在文本中的出现位置无关。

/// 语义桶：标签 + 触发关键词（任一子串命中即算命中）
#[derive(Debug, Clone, Copy)]
pub struct KeywordBucket {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordBucket {
    /// 输入（已转小写）是否命中本桶
    pub fn matches(&self, haystack_lower: &str) -> bool {
        self.keywords.iter().any(|kw| haystack_lower.contains(kw))
    }
}

/// 任一关键词命中
pub fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack_lower.contains(kw))
}

/// 按优先级顺序取第一个命中的桶标签；全不命中返回 None
pub fn classify_first_match(
    haystack_lower: &str,
    buckets: &[KeywordBucket],
) -> Option<&'static str> {
    buckets
        .iter()
        .find(|bucket| bucket.matches(haystack_lower))
        .map(|bucket| bucket.label)
}

/// 主题提取：每个桶独立测试，收集*所有*命中者（非首个命中）
pub fn matching_themes(haystack_lower: &str, themes: &[KeywordBucket]) -> Vec<String> {
    themes
        .iter()
        .filter(|bucket| bucket.matches(haystack_lower))
        .map(|bucket| bucket.label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKETS: [KeywordBucket; 2] = [
        KeywordBucket {
            label: "First",
            keywords: &["alpha", "beta"],
        },
        KeywordBucket {
            label: "Second",
            keywords: &["gamma"],
        },
    ];

    #[test]
    fn test_first_match_wins_regardless_of_text_order() {
        // "gamma" 先出现在文本中，但 "First" 桶在表中优先
        assert_eq!(classify_first_match("gamma then beta", &BUCKETS), Some("First"));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(classify_first_match("nothing relevant", &BUCKETS), None);
    }

    #[test]
    fn test_themes_collect_all_matches() {
        let found = matching_themes("alpha and gamma", &BUCKETS);
        assert_eq!(found, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("has beta inside", &["alpha", "beta"]));
        assert!(!contains_any("nope", &["alpha", "beta"]));
    }
}
