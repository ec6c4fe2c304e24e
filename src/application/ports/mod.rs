//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document_extractor;

pub use document_extractor::{
    DocumentExtractorPort, ExtractError, ExtractedMetadata, MOBI_GUIDANCE,
};
