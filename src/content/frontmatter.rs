//! Front-matter parsing

use serde::{Deserialize, Serialize};

use super::article::ArticleDate;

/// Required metadata at the top of every article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub category: String,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// The error is a human-readable reason; callers attach the article id.
    pub fn parse(content: &str) -> Result<(Self, &str), String> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Err("missing front-matter block".to_string());
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..]) // Skip \n---
        } else {
            return Err("front-matter block is not closed".to_string());
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Err("front-matter block is empty".to_string());
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml_content).map_err(|e| e.to_string())?;
        Ok((fm, remaining))
    }

    /// Parse the `DD-MM-YYYY` date field
    pub fn parse_date(&self) -> Result<ArticleDate, String> {
        self.date.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 15-01-2024
category: programming
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, "Hello World");
        assert_eq!(fm.date, "15-01-2024");
        assert_eq!(fm.category, "programming");
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "---\ntitle: T\ndate: 01-01-2024\ncategory: c\ntags: [a, b]\n---\nbody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, "T");
        assert_eq!(remaining, "body");
    }

    #[test]
    fn test_leading_whitespace_and_crlf() {
        let content = "\r\n---\r\ntitle: T\r\ndate: 01-01-2024\r\ncategory: c\r\n---\r\nbody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.category, "c");
        assert_eq!(remaining, "body");
    }

    #[test]
    fn test_missing_field() {
        let content = "---\ntitle: T\ndate: 01-01-2024\n---\nbody";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(err.contains("category"), "{}", err);
    }

    #[test]
    fn test_missing_block() {
        assert!(FrontMatter::parse("# Just markdown").is_err());
        assert!(FrontMatter::parse("---\ntitle: T\n").is_err());
        assert!(FrontMatter::parse("---\n---\nbody").is_err());
    }

    #[test]
    fn test_parse_date() {
        let (fm, _) =
            FrontMatter::parse("---\ntitle: T\ndate: 20-02-2024\ncategory: c\n---\n").unwrap();
        assert_eq!(fm.parse_date().unwrap().to_string(), "20-02-2024");

        let bad = FrontMatter {
            date: "2024-02-20".to_string(),
            ..fm
        };
        assert!(bad.parse_date().is_err());
    }
}
