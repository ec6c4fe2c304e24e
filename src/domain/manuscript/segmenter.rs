//! 章节分割器
//!
//! 将导入手稿的纯文本扫描为有序的章节序列。
//! 手稿中的章节编号经常标错或重复，因此输出编号由内部计数器
//! 重新派生（严格递增、无空洞），标题行里解析出的数字只用于
//! 兜底标题展示。

use std::sync::LazyLock;

use regex::Regex;

use super::entities::Chapter;

/// 章节标题模式，按优先级从高到低排列，首个命中者生效
///
/// 1. "Chapter 1: Title" / "Chapter 1"
/// 2. "Chapter One: Title"（文字数词）
/// 3. "1. Title"（编号列表式）
/// 4. "Part 1: Title"
static HEADER_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)^\s*chapter\s+(\d+)\s*:?\s*(.*)$").unwrap(),
        Regex::new(r"(?i)^\s*chapter\s+(\w+)\s*:?\s*(.*)$").unwrap(),
        Regex::new(r"^\s*(\d+)\.\s*(.*)$").unwrap(),
        Regex::new(r"(?i)^\s*part\s+(\d+)\s*:?\s*(.*)$").unwrap(),
    ]
});

/// 扫描状态机
///
/// 两个状态:
/// - 尚未遇到首个章节标题（此前的普通行被丢弃）
/// - 正在累积当前章节（显式携带编号、标题与正文累积器）
enum ScanState {
    AwaitingFirstHeader,
    InsideChapter {
        number: u32,
        title: String,
        content: Vec<String>,
    },
}

/// 若该行是章节标题，返回标题正文部分（可能为空字符串）
fn match_header(line: &str) -> Option<String> {
    for pattern in HEADER_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            let title = caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            return Some(title);
        }
    }
    None
}

/// 结束当前章节（如有），并入结果集
fn finalize(state: ScanState, chapters: &mut Vec<Chapter>) {
    if let ScanState::InsideChapter {
        number,
        title,
        content,
    } = state
    {
        let body = content.join("\n\n").trim().to_string();
        if let Ok(chapter) = Chapter::new(number, title, body) {
            chapters.push(chapter);
        }
    }
}

/// 检测文本中的章节边界，返回有序章节序列
///
/// 永不失败：未检测到任何章节标题时，整篇文本作为单一章节返回
/// `{1, "Chapter 1", text.trim()}`。
pub fn detect_chapters(text: &str) -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    let mut state = ScanState::AwaitingFirstHeader;
    let mut counter: u32 = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match match_header(trimmed) {
            Some(header_title) => {
                // 结束上一章，开启新章
                finalize(
                    std::mem::replace(&mut state, ScanState::AwaitingFirstHeader),
                    &mut chapters,
                );
                counter += 1;
                let title = if header_title.is_empty() {
                    format!("Chapter {}", counter)
                } else {
                    header_title
                };
                state = ScanState::InsideChapter {
                    number: counter,
                    title,
                    content: Vec::new(),
                };
            }
            None => {
                // 普通行：并入当前章节正文；首个标题之前的行被丢弃
                if let ScanState::InsideChapter { content, .. } = &mut state {
                    content.push(trimmed.to_string());
                }
            }
        }
    }

    finalize(state, &mut chapters);

    if chapters.is_empty() {
        tracing::debug!("未检测到章节标题，整篇文本作为单一章节");
        if let Ok(chapter) = Chapter::new(1, "Chapter 1".to_string(), text.trim().to_string()) {
            chapters.push(chapter);
        }
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_headers_with_titles() {
        let text = "Chapter 1: The Start\nHello.\n\nChapter 2: Middle\nWorld.";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].chapter_number(), 1);
        assert_eq!(chapters[0].title(), "The Start");
        assert_eq!(chapters[0].content(), "Hello.");
        assert_eq!(chapters[1].chapter_number(), 2);
        assert_eq!(chapters[1].title(), "Middle");
        assert_eq!(chapters[1].content(), "World.");
    }

    #[test]
    fn test_no_headers_falls_back_to_single_chapter() {
        let chapters = detect_chapters("Just some prose.");

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].chapter_number(), 1);
        assert_eq!(chapters[0].title(), "Chapter 1");
        assert_eq!(chapters[0].content(), "Just some prose.");
    }

    #[test]
    fn test_renumbering_ignores_source_numerals() {
        // 手稿中的编号重复/乱序时，输出编号仍为 1..N
        let text = "Chapter 7: A\nfoo\nChapter 7: B\nbar\nChapter 3: C\nbaz";
        let chapters = detect_chapters(text);

        let numbers: Vec<u32> = chapters.iter().map(|c| c.chapter_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(chapters[0].title(), "A");
        assert_eq!(chapters[2].title(), "C");
    }

    #[test]
    fn test_bare_header_gets_counter_title() {
        // 标题行不带标题文本时，兜底标题使用计数器编号而非原文数字
        let text = "Chapter 12\nsome text";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].chapter_number(), 1);
        assert_eq!(chapters[0].title(), "Chapter 1");
        assert_eq!(chapters[0].content(), "some text");
    }

    #[test]
    fn test_word_form_headers() {
        let text = "Chapter One: Beginnings\nfirst\nChapter Two\nsecond";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title(), "Beginnings");
        // "Chapter Two" 无标题文本，落到计数器兜底
        assert_eq!(chapters[1].title(), "Chapter 2");
    }

    #[test]
    fn test_numbered_list_and_part_headers() {
        let text = "1. Awakening\nalpha\nPart 2: The Road\nbeta";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title(), "Awakening");
        assert_eq!(chapters[1].title(), "The Road");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let text = "CHAPTER 1: LOUD\nnoise";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "LOUD");
    }

    #[test]
    fn test_lines_before_first_header_dropped() {
        let text = "Some front matter\nmore junk\nChapter 1: Real Start\nbody";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].content(), "body");
    }

    #[test]
    fn test_content_lines_joined_with_blank_line() {
        let text = "Chapter 1: T\nline one\nline two";
        let chapters = detect_chapters(text);

        assert_eq!(chapters[0].content(), "line one\n\nline two");
    }

    #[test]
    fn test_numbers_contiguous_from_one() {
        let text = "Chapter 1: A\nx\n5. B\ny\nPart 9\nz\nChapter Four: D\nw";
        let chapters = detect_chapters(text);

        let numbers: Vec<u32> = chapters.iter().map(|c| c.chapter_number()).collect();
        assert_eq!(numbers, (1..=chapters.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_idempotent() {
        let text = "Chapter 1: A\nfoo\n\nChapter 2: B\nbar";
        assert_eq!(detect_chapters(text), detect_chapters(text));
    }

    #[test]
    fn test_empty_input_single_empty_chapter() {
        let chapters = detect_chapters("");

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "Chapter 1");
        assert_eq!(chapters[0].content(), "");
    }
}
