//! Article models

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Storage format of article dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Calendar date of an article, written `DD-MM-YYYY` in front-matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleDate(NaiveDate);

impl ArticleDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ArticleDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| format!("invalid date '{}', expected DD-MM-YYYY: {}", s, e))
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for ArticleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Listing-level summary of one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// File name without the store extension
    pub id: String,
    pub title: String,
    pub date: ArticleDate,
    pub category: String,
}

/// Fully rendered article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Date in display form, e.g. "January 1st 2024"
    pub date: String,
    /// Rendered body. Only sanitized when the store is configured untrusted.
    pub content_html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date: ArticleDate = "01-01-2024".parse().unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(date.to_string(), "01-01-2024");
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!("2024-01-01".parse::<ArticleDate>().is_err());
        assert!("31-02-2024".parse::<ArticleDate>().is_err());
        assert!("yesterday".parse::<ArticleDate>().is_err());
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        let a: ArticleDate = "15-06-2023".parse().unwrap();
        let b: ArticleDate = "01-01-2024".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serializes_as_string() {
        let record = ArticleRecord {
            id: "hello".to_string(),
            title: "Hello".to_string(),
            date: "20-02-2024".parse().unwrap(),
            category: "misc".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "20-02-2024");
    }
}
