//! Outline Command Handlers

use crate::application::commands::ParseOutline;
use crate::application::error::ApplicationError;
use crate::domain::outline::{parse_outline_to_prompts, ChapterPrompt};

/// 解析大纲响应
#[derive(Debug, Clone)]
pub struct ParseOutlineResponse {
    pub chapters: Vec<ChapterPrompt>,
}

/// ParseOutline Handler - 大纲文本到逐章提示词
pub struct ParseOutlineHandler;

impl ParseOutlineHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: ParseOutline) -> Result<ParseOutlineResponse, ApplicationError> {
        if command.fallback_count == 0 {
            return Err(ApplicationError::validation(
                "fallback_count must be at least 1",
            ));
        }

        let chapters = parse_outline_to_prompts(&command.outline_text, command.fallback_count);

        tracing::info!(
            chapter_count = chapters.len(),
            "Outline parsed into chapter prompts"
        );

        Ok(ParseOutlineResponse { chapters })
    }
}

impl Default for ParseOutlineHandler {
    fn default() -> Self {
        Self::new()
    }
}
