//! Document Extractor Port - 文档文本抽取抽象
//!
//! 把各种来源格式（纯文本、DOCX、ODT、EPUB……）抽取为保留
//! 换行的 UTF-8 文本。抽取完成后的结构化完全由领域层负责，
//! 适配器只做"格式 → 文本"这一步。

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// MOBI 格式的固定引导信息：不做部分解码，直接引导用户先转换格式
pub const MOBI_GUIDANCE: &str = "MOBI format is not yet supported due to technical complexity. \
Please convert your MOBI file to EPUB format using tools like Calibre, \
then import the EPUB version.";

/// 文档抽取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 不支持的文件格式
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// 文档解析失败
    #[error("Failed to parse document: {0}")]
    ParseFailed(String),

    /// IO 错误
    #[error("IO error: {0}")]
    IoError(String),
}

/// 容器自带的元数据（如 EPUB 的 Dublin Core 字段）
///
/// 字段可为空字符串，表示容器未声明该项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: String,
    pub author: String,
}

/// 文档文本抽取端口
#[async_trait]
pub trait DocumentExtractorPort: Send + Sync {
    /// 抽取文档正文为纯文本（保留换行结构）
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;

    /// 抽取容器声明的元数据
    ///
    /// 无元数据概念的格式（如纯文本）返回 None，由文本启发式接管
    async fn extract_metadata(&self, path: &Path) -> Result<Option<ExtractedMetadata>, ExtractError> {
        let _ = path;
        Ok(None)
    }
}
