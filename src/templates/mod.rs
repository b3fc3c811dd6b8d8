//! Built-in blog templates using Tera template engine
//!
//! Templates are embedded directly in the binary. Tera escapes every
//! interpolated value on `.html` templates; article bodies opt out with
//! `safe` because they are already HTML.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{ArticleDetail, ArticleRecord};
use crate::helpers::encode_url;

/// Template renderer with the embedded blog theme
pub struct TemplateRenderer {
    tera: Tera,
    site: SiteData,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("article.html", include_str!("blog/article.html")),
            ("not_found.html", include_str!("blog/not_found.html")),
        ])?;

        // Register custom filters
        tera.register_filter("category_tag", category_tag_filter);
        tera.register_filter("url_segment", url_segment_filter);

        Ok(Self {
            tera,
            site: SiteData::from(config),
        })
    }

    /// Render the home page listing
    pub fn render_index(&self, articles: &[ArticleRecord]) -> Result<String> {
        let mut context = self.base_context();
        context.insert("articles", articles);
        self.render("index.html", &context)
    }

    /// Render a single article page
    pub fn render_article(&self, article: &ArticleDetail) -> Result<String> {
        let mut context = self.base_context();
        context.insert("article", article);
        self.render("article.html", &context)
    }

    /// Render the page shown for unknown articles
    pub fn render_not_found(&self, message: &str) -> Result<String> {
        let mut context = self.base_context();
        context.insert("message", message);
        self.render("not_found.html", &context)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context
    }

    fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: "#" followed by the category with spaces turned into underscores
fn category_tag_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("category_tag", "value", String, value);
    Ok(tera::Value::String(format!("#{}", s.replace(' ', "_"))))
}

/// Tera filter: percent-encode a URL path segment
fn url_segment_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("url_segment", "value", String, value);
    Ok(tera::Value::String(encode_url(&s)))
}

/// Site-wide values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
        }
    }
}
