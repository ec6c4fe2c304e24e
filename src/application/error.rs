//! 应用层错误定义
//!
//! 统一的命令处理错误类型。注意：领域层的解析函数永不失败
//! （"无结构"走兜底路径，不是错误），这里只承载调用方契约
//! 违反与文档抽取器的失败。

use thiserror::Error;

use crate::application::ports::ExtractError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（调用方契约违反）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文档抽取错误
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ExtractError> for ApplicationError {
    fn from(err: ExtractError) -> Self {
        Self::ExtractionError(err.to_string())
    }
}
