use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// A news/blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, deserialize_with = "deserialize_naive_utc")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_count: u64,
}

impl Article {
    /// Publication date in Indonesian long form, empty when unknown.
    pub fn published_label(&self) -> String {
        self.published_at.map(format_date_id).unwrap_or_default()
    }
}

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// `5 Januari 2025` style date.
pub fn format_date_id(date: DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

/// Python's `datetime.isoformat()` often omits the offset; treat those as UTC.
pub(crate) fn deserialize_naive_utc<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    chrono::NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserialization() {
        let json = r#"{
            "_id": "a1",
            "title": "Mengenal Bakat Anak",
            "slug": "mengenal-bakat-anak",
            "excerpt": "Tips orang tua",
            "content": "<p>...</p>",
            "category": "tips",
            "isPublished": true,
            "publishedAt": "2025-01-05T08:30:00"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "a1");
        assert!(article.is_published);
        assert_eq!(article.published_label(), "5 Januari 2025");
    }

    #[test]
    fn test_article_rfc3339_and_null_date() {
        let json = r#"{"_id": "a2", "title": "T", "publishedAt": "2024-12-31T23:00:00Z"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.published_label(), "31 Desember 2024");

        let json = r#"{"_id": "a3", "title": "T", "publishedAt": null}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.published_label(), "");
        assert!(!article.is_published);
    }
}
