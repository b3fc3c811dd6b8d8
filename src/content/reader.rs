//! Article reader - lists and renders articles from the content store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use super::{
    ArticleDate, ArticleDetail, ArticleError, ArticleRecord, FrontMatter, MarkdownRenderer,
};
use crate::config::SiteConfig;
use crate::helpers::format_date;

/// Reads articles from one content store directory.
///
/// Every call goes back to disk; nothing is cached between calls.
#[derive(Clone)]
pub struct ArticleReader {
    dir: PathBuf,
    extension: String,
    date_format: String,
    renderer: Arc<MarkdownRenderer>,
}

/// One article file, parsed but not rendered
struct Source {
    front_matter: FrontMatter,
    date: ArticleDate,
    body: String,
}

impl ArticleReader {
    /// Create a reader over `dir` using the writing settings from `config`
    pub fn new<P: Into<PathBuf>>(dir: P, config: &SiteConfig) -> Self {
        let renderer = MarkdownRenderer::with_options(&config.highlight, config.trust_content);
        Self {
            dir: dir.into(),
            extension: config.extension.trim_start_matches('.').to_string(),
            date_format: config.date_format.clone(),
            renderer: Arc::new(renderer),
        }
    }

    /// Content store directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List every article, newest first.
    ///
    /// Entries are read in file-name order and the sort is stable, so
    /// articles sharing a date keep that order. Callers should not rely on it.
    pub fn list(&self) -> Result<Vec<ArticleRecord>, ArticleError> {
        if !self.dir.is_dir() {
            return Err(ArticleError::not_found(format!(
                "content store {}",
                self.dir.display()
            )));
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| self.dir.clone(), Path::to_path_buf);
                ArticleError::io(path, e.into())
            })?;
            let path = entry.path();

            let id = match self.article_id(path) {
                Some(id) if entry.file_type().is_file() => id,
                _ => {
                    tracing::debug!("Skipping non-article entry {:?}", path);
                    continue;
                }
            };

            let source = self.load(&id, path)?;
            records.push(ArticleRecord {
                id,
                title: source.front_matter.title,
                date: source.date,
                category: source.front_matter.category,
            });
        }

        records.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Listed {} articles from {:?}", records.len(), self.dir);
        Ok(records)
    }

    /// Load and render a single article
    pub fn get(&self, id: &str) -> Result<ArticleDetail, ArticleError> {
        if !is_valid_id(id) {
            return Err(ArticleError::not_found(format!("article '{}'", id)));
        }

        let path = self.source_path(id);
        if !path.is_file() {
            return Err(ArticleError::not_found(format!("article '{}'", id)));
        }

        let source = self.load(id, &path)?;
        let content_html = self.renderer.render(&source.body);

        Ok(ArticleDetail {
            id: id.to_string(),
            title: source.front_matter.title,
            category: source.front_matter.category,
            date: format_date(&source.date.date(), &self.date_format),
            content_html,
        })
    }

    /// Path of the source file for `id`
    fn source_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }

    /// Article id for a store entry, or None when the entry is not an article
    fn article_id(&self, path: &Path) -> Option<String> {
        let extension = path.extension()?.to_str()?;
        if extension != self.extension {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        is_valid_id(stem).then(|| stem.to_string())
    }

    fn load(&self, id: &str, path: &Path) -> Result<Source, ArticleError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => ArticleError::parse(id, "article is not valid UTF-8"),
            _ => ArticleError::io(path, e),
        })?;
        let (front_matter, body) =
            FrontMatter::parse(&content).map_err(|reason| ArticleError::parse(id, reason))?;
        let date = front_matter
            .parse_date()
            .map_err(|reason| ArticleError::parse(id, reason))?;

        tracing::debug!("Loaded article {:?} from {:?}", id, path);
        Ok(Source {
            body: body.to_string(),
            front_matter,
            date,
        })
    }
}

/// Ids name a file directly inside the store and nothing else
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(['/', '\\', '\0'])
}
