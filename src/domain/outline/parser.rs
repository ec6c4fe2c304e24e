//! 大纲解析器
//!
//! 把外部生成器输出的 "OUTLINE:" 文本块解析为章节提示记录。
//! 与手稿分割器不同，这里保留大纲中解析到的章节编号——大纲由
//! 生成器产出，编号预期是规整的；重复编号跳过、空洞不补全。
//! 解析失败时走具名的占位兜底路径，结果永不为空。

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::entities::ChapterPrompt;

const START_MARKER: &str = "OUTLINE:";
const END_MARKER: &str = "END OF OUTLINE";

static RE_OUTLINE_CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*Chapter\s+(\d+)\s*:\s*(.*?)\s*$").unwrap());

static RE_LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*-\s*").unwrap());

/// 取出标记之间的工作文本
///
/// - 有 `OUTLINE:`：取其后内容；若 `END OF OUTLINE`（最后一次出现）
///   在其之后，则截止到该标记
/// - 无 `OUTLINE:`：整个输入都是工作文本
fn extract_outline_block(content: &str) -> &str {
    match content.find(START_MARKER) {
        Some(start_idx) => {
            let after_start = start_idx + START_MARKER.len();
            match content.rfind(END_MARKER) {
                Some(end_idx) if end_idx > start_idx => content[after_start..end_idx].trim(),
                _ => {
                    tracing::debug!("未找到位置合法的 END OF OUTLINE，取 OUTLINE: 之后全部内容");
                    content[after_start..].trim()
                }
            }
        }
        None => {
            tracing::debug!("未找到 OUTLINE: 标记，解析完整输入");
            content
        }
    }
}

/// 具名兜底路径：生成 fallback_count 个占位章节
///
/// 解析得到零个章节（无标题命中或内部解析错误）时的唯一出口
fn placeholder_prompts(fallback_count: u32) -> Vec<ChapterPrompt> {
    (1..=fallback_count)
        .filter_map(|i| {
            ChapterPrompt::new(
                i,
                format!("Chapter {} (Outline Parsing Failed)", i),
                format!("Content outline for chapter {} could not be parsed.", i),
            )
            .ok()
        })
        .collect()
}

/// 尽力解析工作文本中的章节标题与正文；零命中时返回空集
fn try_parse(outline_content: &str) -> Vec<ChapterPrompt> {
    let working = extract_outline_block(outline_content);

    let matches: Vec<regex::Captures> = RE_OUTLINE_CHAPTER.captures_iter(working).collect();
    tracing::debug!(count = matches.len(), "命中的章节标题数");

    let mut seen: HashSet<u32> = HashSet::new();
    let mut prompts = Vec::new();

    for (i, caps) in matches.iter().enumerate() {
        // 编号超出 u32 或为 0 的标题行按"部分可解析输入"跳过
        let chapter_number: u32 = match caps[1].parse() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(numeral = &caps[1], "章节编号无法使用，跳过该标题行");
                continue;
            }
        };

        if !seen.insert(chapter_number) {
            tracing::debug!(chapter_number, "跳过重复章节编号，保留首次出现");
            continue;
        }

        let captured_title = caps[2].trim();
        let title = if captured_title.is_empty() {
            format!("Chapter {} (Untitled)", chapter_number)
        } else {
            captured_title.to_string()
        };

        // 正文为本标题行之后到下一标题行（或文本末尾）之间的内容
        let content_start = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let content_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(working.len());
        let body = working[content_start..content_end].trim();
        let prompt = RE_LEADING_BULLET.replace_all(body, "* ").to_string();

        if let Ok(parsed) = ChapterPrompt::new(chapter_number, title, prompt) {
            prompts.push(parsed);
        }
    }

    prompts
}

/// 解析大纲文本为章节提示序列
///
/// 永不失败、永不为空：解析得到零个章节时，返回 `fallback_count`
/// 个占位章节。结果按章节编号升序排列。
pub fn parse_outline_to_prompts(outline_text: &str, fallback_count: u32) -> Vec<ChapterPrompt> {
    let mut prompts = try_parse(outline_text);

    if prompts.is_empty() {
        tracing::warn!(
            fallback_count,
            "大纲解析未得到任何章节，使用占位章节结构"
        );
        prompts = placeholder_prompts(fallback_count);
    }

    prompts.sort_by_key(|p| p.chapter_number());
    tracing::debug!(count = prompts.len(), "最终章节提示数");
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_numbers_skipped_first_wins() {
        let text = "OUTLINE:\nChapter 1: A\n- event1\nChapter 1: A-dup\n- event2\nChapter 2: B\n- event3\nEND OF OUTLINE";
        let prompts = parse_outline_to_prompts(text, 5);

        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].chapter_number(), 1);
        assert_eq!(prompts[0].title(), "A");
        assert_eq!(prompts[0].prompt(), "* event1");
        assert_eq!(prompts[1].chapter_number(), 2);
        assert_eq!(prompts[1].title(), "B");
        assert_eq!(prompts[1].prompt(), "* event3");
    }

    #[test]
    fn test_no_headers_produces_placeholders() {
        let prompts = parse_outline_to_prompts("nothing parseable here", 3);

        assert_eq!(prompts.len(), 3);
        for (i, p) in prompts.iter().enumerate() {
            let n = (i + 1) as u32;
            assert_eq!(p.chapter_number(), n);
            assert_eq!(p.title(), format!("Chapter {} (Outline Parsing Failed)", n));
            assert_eq!(
                p.prompt(),
                format!("Content outline for chapter {} could not be parsed.", n)
            );
        }
    }

    #[test]
    fn test_missing_start_marker_parses_whole_input() {
        let text = "Chapter 1: Solo\n- only event";
        let prompts = parse_outline_to_prompts(text, 4);

        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].title(), "Solo");
        assert_eq!(prompts[0].prompt(), "* only event");
    }

    #[test]
    fn test_end_marker_before_start_ignored() {
        let text = "END OF OUTLINE\nOUTLINE:\nChapter 1: After\n- event";
        let prompts = parse_outline_to_prompts(text, 2);

        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].title(), "After");
    }

    #[test]
    fn test_untitled_header_gets_placeholder_title() {
        let text = "OUTLINE:\nChapter 4:\n- event\nEND OF OUTLINE";
        let prompts = parse_outline_to_prompts(text, 1);

        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].chapter_number(), 4);
        assert_eq!(prompts[0].title(), "Chapter 4 (Untitled)");
    }

    #[test]
    fn test_parsed_numbers_kept_and_sorted_gaps_allowed() {
        // 与手稿分割器不同：保留解析到的编号，不重排为 1..N
        let text = "OUTLINE:\nChapter 5: Late\n- e5\nChapter 2: Early\n- e2\nEND OF OUTLINE";
        let prompts = parse_outline_to_prompts(text, 3);

        let numbers: Vec<u32> = prompts.iter().map(|p| p.chapter_number()).collect();
        assert_eq!(numbers, vec![2, 5]);
        assert_eq!(prompts[0].title(), "Early");
    }

    #[test]
    fn test_multi_line_body_with_bullets_rewritten() {
        let text = "OUTLINE:\nChapter 1: A\n- first event\n- second event\nplain line\nEND OF OUTLINE";
        let prompts = parse_outline_to_prompts(text, 1);

        assert_eq!(
            prompts[0].prompt(),
            "* first event\n* second event\nplain line"
        );
    }

    #[test]
    fn test_case_insensitive_headers() {
        let text = "outline:\nchapter 1: lower\n- e";
        let prompts = parse_outline_to_prompts(text, 2);

        // 标题匹配大小写不敏感；起始标记是字面量，此处未命中，
        // 因此整个输入作为工作文本解析
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].title(), "lower");
    }

    #[test]
    fn test_result_never_empty_and_idempotent() {
        let text = "OUTLINE:\nChapter 1: A\n- e\nEND OF OUTLINE";
        let first = parse_outline_to_prompts(text, 5);
        let second = parse_outline_to_prompts(text, 5);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_numbered_header_skipped() {
        let text = "OUTLINE:\nChapter 0: Prologue\n- e0\nChapter 1: Real\n- e1\nEND OF OUTLINE";
        let prompts = parse_outline_to_prompts(text, 2);

        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].chapter_number(), 1);
    }
}
