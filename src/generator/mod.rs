//! Generator module - writes the index and article pages as static HTML

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::content::ArticleReader;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Static site generator using the built-in templates
pub struct Generator {
    reader: ArticleReader,
    renderer: TemplateRenderer,
    public_dir: std::path::PathBuf,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            reader: blog.reader(),
            renderer: TemplateRenderer::new(&blog.config)?,
            public_dir: blog.public_dir.clone(),
        })
    }

    /// Generate the entire site, returning the number of article pages written
    pub fn generate(&self) -> Result<usize> {
        let articles = self.reader.list()?;

        fs::create_dir_all(&self.public_dir)?;

        let index = self.renderer.render_index(&articles)?;
        write_file(&self.public_dir.join("index.html"), &index)?;

        for record in &articles {
            let article = self.reader.get(&record.id)?;
            let html = self.renderer.render_article(&article)?;
            let path = self.public_dir.join(&record.id).join("index.html");
            write_file(&path, &html)?;
            tracing::debug!("Generated {:?}", path);
        }

        Ok(articles.len())
    }
}

/// Write a file, creating parent directories as needed
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, Blog) {
        let tmp = TempDir::new().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(
            articles.join("hello.md"),
            "---\ntitle: Hello\ndate: 01-01-2024\ncategory: misc\n---\n# Hi\n",
        )
        .unwrap();
        fs::write(
            articles.join("older.md"),
            "---\ntitle: Older\ndate: 15-06-2023\ncategory: misc\n---\nOld text.\n",
        )
        .unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        (tmp, blog)
    }

    #[test]
    fn test_generate_writes_all_pages() {
        let (_tmp, blog) = site();
        let count = Generator::new(&blog).unwrap().generate().unwrap();
        assert_eq!(count, 2);

        let index = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(index.find("Hello").unwrap() < index.find("Older").unwrap());

        let hello = fs::read_to_string(blog.public_dir.join("hello/index.html")).unwrap();
        assert!(hello.contains("<h1>Hi</h1>"));
        assert!(hello.contains("January 1st 2024"));
        assert!(blog.public_dir.join("older/index.html").exists());
    }

    #[test]
    fn test_generate_fails_without_store() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert!(Generator::new(&blog).unwrap().generate().is_err());
        assert!(!blog.public_dir.exists());
    }
}
