//! Import Command Handlers

use std::sync::Arc;

use crate::application::commands::ImportManuscript;
use crate::application::error::ApplicationError;
use crate::application::ports::DocumentExtractorPort;
use crate::domain::manuscript::{analyze_manuscript, ImportAnalysis, Manuscript};

/// 导入手稿响应
#[derive(Debug, Clone)]
pub struct ImportManuscriptResponse {
    pub manuscript: Manuscript,
    /// 导入时的一次性概览（角色/背景候选等），供下游预填
    pub analysis: ImportAnalysis,
}

/// ImportManuscript Handler - 抽取文本并结构化为手稿
pub struct ImportManuscriptHandler {
    extractor: Arc<dyn DocumentExtractorPort>,
}

impl ImportManuscriptHandler {
    pub fn new(extractor: Arc<dyn DocumentExtractorPort>) -> Self {
        Self { extractor }
    }

    /// 抽取 → 推断标题/作者 → 章节分割 → 导入概览
    pub async fn handle(
        &self,
        command: ImportManuscript,
    ) -> Result<ImportManuscriptResponse, ApplicationError> {
        if command.filename.trim().is_empty() {
            return Err(ApplicationError::validation("filename must not be empty"));
        }

        let text = self.extractor.extract_text(&command.file_path).await?;
        let mut manuscript = Manuscript::from_text(&command.filename, &text);

        // 容器声明的元数据优先于文本启发式
        if let Some(metadata) = self.extractor.extract_metadata(&command.file_path).await? {
            if !metadata.title.is_empty() {
                manuscript.set_title(metadata.title);
            }
            if !metadata.author.is_empty() {
                manuscript.set_author(metadata.author);
            }
        }

        let analysis = analyze_manuscript(&manuscript);

        tracing::info!(
            manuscript_id = %manuscript.id(),
            filename = %command.filename,
            chapter_count = manuscript.chapter_count(),
            total_words = analysis.total_words,
            "Manuscript import completed"
        );

        Ok(ImportManuscriptResponse {
            manuscript,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeExtractor;
    use std::path::PathBuf;

    fn command(filename: &str) -> ImportManuscript {
        ImportManuscript {
            file_path: PathBuf::from("/tmp/upload.bin"),
            filename: filename.to_string(),
        }
    }

    #[tokio::test]
    async fn test_import_segments_extracted_text() {
        let extractor = Arc::new(FakeExtractor::new(
            "The Hollow Crown\nby Jane Doe\n\nChapter 1: Dawn\nIt begins here.\n\nChapter 2: Dusk\nIt ends.",
        ));
        let handler = ImportManuscriptHandler::new(extractor);

        let response = handler.handle(command("upload.txt")).await.unwrap();

        assert_eq!(response.manuscript.title(), "The Hollow Crown");
        assert_eq!(response.manuscript.author(), "Jane Doe");
        assert_eq!(response.manuscript.chapter_count(), 2);
        assert_eq!(response.analysis.chapter_count, 2);
    }

    #[tokio::test]
    async fn test_container_metadata_overrides_inference() {
        let extractor = Arc::new(
            FakeExtractor::new("The Hollow Crown\nby Jane Doe\n\nChapter 1: Dawn\ntext")
                .with_metadata("Container Title", "Container Author"),
        );
        let handler = ImportManuscriptHandler::new(extractor);

        let response = handler.handle(command("upload.epub")).await.unwrap();

        assert_eq!(response.manuscript.title(), "Container Title");
        assert_eq!(response.manuscript.author(), "Container Author");
    }

    #[tokio::test]
    async fn test_empty_filename_rejected() {
        let extractor = Arc::new(FakeExtractor::new("text"));
        let handler = ImportManuscriptHandler::new(extractor);

        let result = handler.handle(command("   ")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_extractor_failure_surfaces_as_extraction_error() {
        let extractor = Arc::new(FakeExtractor::failing("corrupt archive"));
        let handler = ImportManuscriptHandler::new(extractor);

        let result = handler.handle(command("upload.docx")).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ExtractionError(_))
        ));
    }
}
