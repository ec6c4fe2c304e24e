//! Fake Extractor - 用于测试的文档抽取器
//!
//! 始终返回固定文本，不读取文件系统

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{
    DocumentExtractorPort, ExtractError, ExtractedMetadata,
};

/// Fake Extractor
///
/// 用于测试，始终返回构造时给定的文本与元数据
pub struct FakeExtractor {
    text: String,
    metadata: Option<ExtractedMetadata>,
    failure: Option<String>,
}

impl FakeExtractor {
    /// 创建返回固定文本的抽取器
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
            failure: None,
        }
    }

    /// 附加容器元数据
    pub fn with_metadata(mut self, title: impl Into<String>, author: impl Into<String>) -> Self {
        self.metadata = Some(ExtractedMetadata {
            title: title.into(),
            author: author.into(),
        });
        self
    }

    /// 创建始终失败的抽取器
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            metadata: None,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl DocumentExtractorPort for FakeExtractor {
    async fn extract_text(&self, _path: &Path) -> Result<String, ExtractError> {
        match &self.failure {
            Some(message) => Err(ExtractError::ParseFailed(message.clone())),
            None => Ok(self.text.clone()),
        }
    }

    async fn extract_metadata(
        &self,
        _path: &Path,
    ) -> Result<Option<ExtractedMetadata>, ExtractError> {
        Ok(self.metadata.clone())
    }
}
