//! Import Commands - 手稿导入

use std::path::PathBuf;

/// 导入手稿命令：抽取文档文本并结构化为章节
#[derive(Debug, Clone)]
pub struct ImportManuscript {
    pub file_path: PathBuf,
    /// 原始上传文件名（扩展名判定与标题兜底都依赖它）
    pub filename: String,
}
