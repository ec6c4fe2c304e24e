//! Plain Text Extractor - 纯文本文件适配器
//!
//! 只处理 .txt / .md 这类本身就是文本的文件；其他扩展名
//! 一律拒绝并给出明确的格式提示。MOBI 单独识别，返回
//! 引导用户先转换格式的固定信息。

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractorPort, ExtractError, MOBI_GUIDANCE};

/// 纯文本适配器支持的扩展名
const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Plain Text Extractor
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extension_of(path: &Path) -> String {
        path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractorPort for PlainTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let ext = Self::extension_of(path);

        if ext == "mobi" {
            return Err(ExtractError::UnsupportedFormat(MOBI_GUIDANCE.to_string()));
        }
        if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ExtractError::UnsupportedFormat(format!(
                "'{}' is not a plain text file (supported: .txt, .md)",
                ext
            )));
        }

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExtractError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            char_count = text.chars().count(),
            "Plain text extracted"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_txt_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "Chapter 1: Dawn\n\nIt begins.").unwrap();

        let extractor = PlainTextExtractor::new();
        let text = extractor.extract_text(&path).await.unwrap();

        assert_eq!(text, "Chapter 1: Dawn\n\nIt begins.");
    }

    #[tokio::test]
    async fn test_mobi_rejected_with_guidance() {
        let extractor = PlainTextExtractor::new();
        let result = extractor.extract_text(Path::new("/tmp/book.mobi")).await;

        match result {
            Err(ExtractError::UnsupportedFormat(msg)) => {
                assert!(msg.contains("Calibre"));
            }
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_extension_rejected() {
        let extractor = PlainTextExtractor::new();
        let result = extractor.extract_text(Path::new("/tmp/book.pdf")).await;

        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let extractor = PlainTextExtractor::new();
        let result = extractor
            .extract_text(Path::new("/tmp/definitely-not-here.txt"))
            .await;

        assert!(matches!(result, Err(ExtractError::IoError(_))));
    }

    #[tokio::test]
    async fn test_no_container_metadata() {
        let extractor = PlainTextExtractor::new();
        let metadata = extractor
            .extract_metadata(Path::new("/tmp/draft.txt"))
            .await
            .unwrap();

        assert!(metadata.is_none());
    }
}
