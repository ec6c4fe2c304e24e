//! 导入分析
//!
//! 对导入手稿做非 AI 的基础分析：章节/词数统计、可能的角色名、
//! 世界观摘要占位。AI 驱动的深入分析属于外部协作方，不在本层。

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::Manuscript;

/// 角色名扫描中忽略的常见词
const COMMON_WORDS: [&str; 8] = ["the", "and", "but", "for", "or", "nor", "so", "yet"];

/// 最多报告的候选角色名数量
const MAX_NAME_CANDIDATES: usize = 10;

/// 导入分析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAnalysis {
    pub title: String,
    pub chapter_count: usize,
    pub total_words: usize,
    /// 候选角色名摘要（基础启发式）
    pub suggested_characters: String,
    /// 世界观摘要占位
    pub suggested_world: String,
    pub generated_at: DateTime<Utc>,
}

/// Python str.istitle() 语义：每个字母连续段首字母大写、其余小写
fn is_title_word(word: &str) -> bool {
    let mut has_alpha = false;
    let mut prev_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                if !c.is_lowercase() {
                    return false;
                }
            } else if !c.is_uppercase() {
                return false;
            }
            has_alpha = true;
            prev_alpha = true;
        } else {
            prev_alpha = false;
        }
    }
    has_alpha
}

/// 千位分组显示（85000 -> "85,000"）
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 基础角色名提取：首字母大写且非常见词的词视为候选
///
/// 候选收入有序集合后取前 10 个，结果确定可复现。
fn extract_basic_characters(text: &str) -> String {
    let mut names: BTreeSet<String> = BTreeSet::new();

    for word in text.split_whitespace() {
        if is_title_word(word)
            && word.chars().count() > 2
            && !COMMON_WORDS.contains(&word.to_lowercase().as_str())
        {
            names.insert(word.to_string());
        }
    }

    if names.is_empty() {
        "[No clear character names detected in basic analysis.]".to_string()
    } else {
        let listed: Vec<String> = names.into_iter().take(MAX_NAME_CANDIDATES).collect();
        format!(
            "Potential characters identified: {}\n\n[This is a basic analysis. AI-powered character extraction will provide detailed profiles.]",
            listed.join(", ")
        )
    }
}

/// 基础世界观摘要：只有词数统计，其余留给外部分析
fn extract_basic_world(total_words: usize) -> String {
    format!(
        "Basic World Analysis:\n- Setting: [To be analyzed by AI]\n- Word count: {} words\n- Genre: [To be determined]\n\n[This is a basic analysis. AI-powered world extraction will provide detailed setting, rules, and environment information.]",
        group_thousands(total_words)
    )
}

/// 对手稿做导入分析
pub fn analyze_manuscript(manuscript: &Manuscript) -> ImportAnalysis {
    let full_text = manuscript
        .chapters()
        .iter()
        .map(|c| c.content())
        .collect::<Vec<_>>()
        .join("\n\n");
    let total_words = manuscript.total_words();

    ImportAnalysis {
        title: manuscript.title().to_string(),
        chapter_count: manuscript.chapter_count(),
        total_words,
        suggested_characters: extract_basic_characters(&full_text),
        suggested_world: extract_basic_world(total_words),
        generated_at: Utc::now(),
    }
}
