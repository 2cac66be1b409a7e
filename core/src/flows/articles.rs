//! Article listing filters and detail lookup.

use log::warn;

use crate::api::Backend;
use crate::error::ApiResult;
use crate::models::Article;

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Where unknown or unpublished articles send the reader.
pub const ARTICLES_ROUTE: &str = "/articles";

/// Number of related articles shown under a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Published articles, in the order received.
pub async fn load_published<B: Backend>(backend: &B) -> ApiResult<Vec<Article>> {
    let articles = backend.articles().await?;
    Ok(articles.into_iter().filter(|a| a.is_published).collect())
}

/// `all` followed by each distinct non-empty category, first-seen order.
pub fn categories(articles: &[Article]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for article in articles {
        if !article.category.is_empty() && !out.contains(&article.category) {
            out.push(article.category.clone());
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    pub search: String,
    pub category: String,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || article.title.to_lowercase().contains(&needle)
            || article
                .excerpt
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle));
        let matches_category =
            self.category == ALL_CATEGORIES || article.category == self.category;
        matches_search && matches_category
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Fetch one article. `None` means the reader should be redirected to
/// [`ARTICLES_ROUTE`].
pub async fn load_article<B: Backend>(backend: &B, id: &str) -> Option<Article> {
    match backend.article(id).await {
        Ok(article) if article.is_published => Some(article),
        Ok(_) => None,
        Err(e) => {
            if !e.is_not_found() {
                warn!("article {}: {}", id, e);
            }
            None
        }
    }
}

/// Up to [`RELATED_LIMIT`] published articles sharing `current`'s category.
pub fn related<'a>(articles: &'a [Article], current: &Article) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.is_published && a.id != current.id && a.category == current.category)
        .take(RELATED_LIMIT)
        .collect()
}
