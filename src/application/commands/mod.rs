//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod import_commands;
mod outline_commands;
mod story_commands;

pub mod handlers;

pub use import_commands::*;
pub use outline_commands::*;
pub use story_commands::*;
