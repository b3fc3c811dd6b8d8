//! Show a single article

use anyhow::Result;
use std::io::Write;

use crate::Blog;

/// Print one rendered article
pub fn run(blog: &Blog, id: &str, json: bool) -> Result<()> {
    let article = blog.reader().get(id)?;
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &article)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", article.title)?;
        writeln!(out, "{} · #{}", article.date, article.category.replace(' ', "_"))?;
        writeln!(out)?;
        write!(out, "{}", article.content_html)?;
    }

    Ok(())
}
