//! Manuscript Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Chapter;
use super::metadata::infer_title_author;
use super::segmenter::detect_chapters;
use super::value_objects::ManuscriptId;

/// Manuscript 聚合根 - 一次导入得到的结构化手稿
///
/// 不变量:
/// - chapters 的编号为 1..N，由分割器保证
/// - title/author 可为空字符串，但永不缺失
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manuscript {
    id: ManuscriptId,
    title: String,
    author: String,
    chapters: Vec<Chapter>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Manuscript {
    /// 创建空手稿
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ManuscriptId::new(),
            title: title.into(),
            author: author.into(),
            chapters: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 从导入文本创建手稿：推断标题/作者并检测章节边界
    pub fn from_text(filename: &str, text: &str) -> Self {
        let inferred = infer_title_author(text, filename);
        let chapters = detect_chapters(text);

        tracing::info!(
            title = %inferred.title,
            author = %inferred.author,
            chapter_count = chapters.len(),
            "Manuscript imported"
        );

        let mut manuscript = Self::new(inferred.title, inferred.author);
        manuscript.chapters = chapters;
        manuscript
    }

    /// 替换章节集（下游编辑协作方使用）
    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        self.chapters = chapters;
        self.updated_at = Utc::now();
    }

    /// 覆盖标题（容器元数据优先于文本启发式时使用）
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Utc::now();
    }

    /// 覆盖作者
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &ManuscriptId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// 全文词数（各章节正文之和）
    pub fn total_words(&self) -> usize {
        self.chapters.iter().map(|c| c.word_count()).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
