//! Content module - the article store reader and its markdown pipeline

mod article;
mod error;
mod frontmatter;
mod markdown;
mod reader;

pub use article::{ArticleDate, ArticleDetail, ArticleRecord, DATE_FORMAT};
pub use error::ArticleError;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use reader::ArticleReader;
