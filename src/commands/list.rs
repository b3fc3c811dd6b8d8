//! List articles

use anyhow::Result;
use std::io::Write;

use crate::content::ArticleRecord;
use crate::Blog;

/// Print the article listing, newest first
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let articles = blog.reader().list()?;
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &articles)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Articles ({}):", articles.len())?;
        for article in &articles {
            writeln!(out, "  {}", format_line(article))?;
        }
    }

    Ok(())
}

fn format_line(article: &ArticleRecord) -> String {
    format!(
        "{} - {} #{} [{}]",
        article.date,
        article.title,
        article.category.replace(' ', "_"),
        article.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let article = ArticleRecord {
            id: "hello".to_string(),
            title: "Hello".to_string(),
            date: "01-01-2024".parse().unwrap(),
            category: "rust notes".to_string(),
        };
        assert_eq!(format_line(&article), "01-01-2024 - Hello #rust_notes [hello]");
    }
}
