//! Document Extractor 适配器

mod fake_extractor;
mod plain_text_extractor;

pub use fake_extractor::FakeExtractor;
pub use plain_text_extractor::PlainTextExtractor;
