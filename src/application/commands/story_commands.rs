//! Story Commands - 设定散文的类型化提取

/// 解析世界观文本命令
#[derive(Debug, Clone)]
pub struct AnalyzeWorldText {
    /// 世界名（记录用，不参与提取）
    pub title: String,
    pub ai_text: String,
}

/// 解析角色表文本命令
#[derive(Debug, Clone)]
pub struct AnalyzeCharactersText {
    pub ai_text: String,
}

/// 解析故事大纲文本命令
#[derive(Debug, Clone)]
pub struct AnalyzeOutlineText {
    pub ai_text: String,
}
