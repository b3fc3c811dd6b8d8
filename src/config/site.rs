//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Directory
    pub articles_dir: String,
    pub public_dir: String,

    // Writing
    /// File extension of article sources, without the leading dot
    pub extension: String,
    /// Inject rendered article HTML as-is. Turn off when article bodies
    /// come from untrusted contributors.
    pub trust_content: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format (Moment.js tokens)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Minimal Blog".to_string(),
            description: String::new(),
            language: "en".to_string(),

            articles_dir: "articles".to_string(),
            public_dir: "public".to_string(),

            extension: "md".to_string(),
            trust_content: true,
            highlight: HighlightConfig::default(),

            date_format: "MMMM Do YYYY".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_number: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_number: false,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}
