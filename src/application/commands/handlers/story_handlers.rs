//! Story Command Handlers
//!
//! 三个提取命令都是纯文本分类，处理器只做日志与编排

use crate::application::commands::{AnalyzeCharactersText, AnalyzeOutlineText, AnalyzeWorldText};
use crate::application::error::ApplicationError;
use crate::domain::story::{
    parse_characters_text, parse_outline_text, parse_world_text, CharactersData, OutlineData,
    WorldData,
};

/// Story Analysis Handler - 设定散文到类型化记录
pub struct StoryAnalysisHandler;

impl StoryAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_world(&self, command: AnalyzeWorldText) -> Result<WorldData, ApplicationError> {
        let world = parse_world_text(&command.title, &command.ai_text);

        tracing::info!(
            title = %world.title,
            genre = %world.genre,
            "World text analyzed"
        );

        Ok(world)
    }

    pub fn handle_characters(
        &self,
        command: AnalyzeCharactersText,
    ) -> Result<CharactersData, ApplicationError> {
        let data = parse_characters_text(&command.ai_text);

        tracing::info!(
            character_count = data.characters.len(),
            "Characters text analyzed"
        );

        Ok(data)
    }

    pub fn handle_outline(
        &self,
        command: AnalyzeOutlineText,
    ) -> Result<OutlineData, ApplicationError> {
        let outline = parse_outline_text(&command.ai_text);

        tracing::info!(
            genre = %outline.story_structure.genre,
            "Outline text analyzed"
        );

        Ok(outline)
    }
}

impl Default for StoryAnalysisHandler {
    fn default() -> Self {
        Self::new()
    }
}
