//! 标题与作者推断
//!
//! 手稿没有显式元数据时，从文本开头（以及文件名兜底）猜测
//! 文档标题与作者。两者都可能为空字符串，但永不缺失。

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::value_objects::TitleAuthor;

/// 只检查文本开头的前 20 个非空行
const TITLE_SCAN_LINES: usize = 20;

/// 早期位置优先阈值：位置 < 10 且长度 < 50 的候选优先
const EARLY_POSITION: usize = 10;
const SHORT_TITLE_LEN: usize = 50;

/// 含这些子串的行视为元数据/地址行，不参与标题推断
/// （"maršala" 等为真实手稿页眉中常见的地址片段）
const SKIP_TOKENS: [&str; 6] = ["@", "words", "maršala", "tuzla", "bosnia", "herzegovina"];

static RE_BY_AUTHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)by\s+(.+)").unwrap());

static RE_CHAPTER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s+\d+").unwrap());

static RE_WORD_COUNT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+\s+words").unwrap());

static RE_WORD_COUNT_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s+words?").unwrap());

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn is_skip_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    SKIP_TOKENS.iter().any(|token| lower.contains(token))
}

fn is_title_candidate(line: &str) -> bool {
    let len = line.chars().count();
    len > 3
        && len < 100
        && !RE_CHAPTER_LINE.is_match(line)
        && !(!line.is_empty() && line.chars().all(|c| c.is_ascii_digit()))
        && !RE_WORD_COUNT_LINE.is_match(line)
}

/// 按空白分词、逐词首字母大写，词内其余字符转小写
/// （撇号、连字号等不开启新词）
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 从文本开头与文件名推断标题和作者
///
/// 流程:
/// 1. 扫描前 20 个非空行，跳过元数据/地址行（候选位置按非空行
///    计数，空行不占位置）
/// 2. "by <name>" 模式命中即取作者（首个命中生效），该行不再作标题候选
/// 3. 收集长度合适、非章节行、非字数行的标题候选
/// 4. 优先取位置 < 10 且长度 < 50 的首个候选，否则取最早的候选
/// 5. 标题仍为空时从文件名主干派生；作者仍为空时取文件名最后一个连字符之后的部分
/// 6. 清理标题中的字数片段并折叠空白
pub fn infer_title_author(text: &str, filename: &str) -> TitleAuthor {
    let mut title = String::new();
    let mut author = String::new();
    let mut candidates: Vec<(usize, String)> = Vec::new();

    let head_lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TITLE_SCAN_LINES);

    for (pos, line) in head_lines.enumerate() {
        if is_skip_line(line) {
            continue;
        }

        if let Some(caps) = RE_BY_AUTHOR.captures(line) {
            if author.is_empty() {
                author = caps[1].trim().to_string();
            }
            continue;
        }

        if is_title_candidate(line) {
            candidates.push((pos, line.to_string()));
        }
    }

    // 优先选择靠前且较短的候选
    for (pos, candidate) in &candidates {
        if *pos < EARLY_POSITION && candidate.chars().count() < SHORT_TITLE_LEN {
            title = candidate.clone();
            break;
        }
    }
    if title.is_empty() {
        if let Some((_, first)) = candidates.first() {
            title = first.clone();
        }
    }

    // 文件名兜底
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    if title.is_empty() {
        title = title_case(&stem.replace(['-', '_'], " "));
    }

    // "Title-Author Name.docx" 式文件名中的作者
    if author.is_empty() && filename.contains('-') {
        let parts: Vec<&str> = stem.split('-').collect();
        if parts.len() >= 2 {
            author = parts[parts.len() - 1].trim().to_string();
        }
    }

    // 清理标题：去掉字数片段，折叠空白
    if !title.is_empty() {
        title = RE_WORD_COUNT_FRAGMENT.replace_all(&title, "").to_string();
        title = RE_WHITESPACE_RUN
            .replace_all(&title, " ")
            .trim()
            .to_string();
    }

    TitleAuthor::new(title, author)
}
