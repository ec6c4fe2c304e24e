//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod import_handlers;
mod outline_handlers;
mod story_handlers;

pub use import_handlers::*;
pub use outline_handlers::*;
pub use story_handlers::*;
