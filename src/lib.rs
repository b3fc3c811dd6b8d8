//! minimal-blog: a minimal markdown-backed blog
//!
//! Articles are markdown files with a YAML front-matter block in a single
//! directory. The [`content::ArticleReader`] lists them newest first and
//! renders one on demand; the generator and the server turn those into pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store directory
    pub articles_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let articles_dir = base_dir.join(&config.articles_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            articles_dir,
            public_dir,
        }
    }

    /// A reader over this blog's content store
    pub fn reader(&self) -> content::ArticleReader {
        content::ArticleReader::new(&self.articles_dir, &self.config)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.articles_dir, tmp.path().join("articles"));
        assert_eq!(blog.public_dir, tmp.path().join("public"));
    }

    #[test]
    fn test_new_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("_config.yml"),
            "title: Notes\narticles_dir: posts\npublic_dir: out\n",
        )
        .unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.config.title, "Notes");
        assert_eq!(blog.articles_dir, tmp.path().join("posts"));
        assert_eq!(blog.reader().dir(), tmp.path().join("posts"));
        assert_eq!(blog.public_dir, tmp.path().join("out"));
    }
}
