//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DocumentExtractor）
//! - commands: CQRS 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    // Import commands
    ImportManuscript,
    // Outline commands
    ParseOutline,
    // Story commands
    AnalyzeCharactersText,
    AnalyzeOutlineText,
    AnalyzeWorldText,
    // Handlers
    handlers::{
        ImportManuscriptHandler, ImportManuscriptResponse, ParseOutlineHandler,
        ParseOutlineResponse, StoryAnalysisHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{DocumentExtractorPort, ExtractError, ExtractedMetadata, MOBI_GUIDANCE};
