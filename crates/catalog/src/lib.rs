//! Article catalog.
//!
//! Works purely on already-loaded, in-memory collections:
//! - OR-substring text search over title, excerpt and body
//! - category filtering and stable multi-key sorting for the admin table
//! - front page, category and topic views
//! - cancellable, simulated-latency search for the results page

use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;

pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod search;
pub mod sort;
pub mod view;

pub use error::{CatalogError, Result};
pub use filter::{CategoryFilter, filter_by_category, filter_by_search};
pub use models::{Category, ContentItem, parse_date};
pub use search::{
    DEFAULT_SEARCH_DELAY, PendingSearch, SearchPage, SearchResultsState, SearchTicket,
    async_search, result_summary,
};
pub use sort::{SortConfig, SortDirection, SortKey, sort_items, toggle_sort};
pub use view::{
    ArticleListView, DEFAULT_TOPIC_DESCRIPTION, HOME_SECTION_LIMIT, HomePage, topic_description,
    topic_display_name, topic_query,
};

/// Read-only article collection
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[ContentItem]>,
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items: items.into() }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(dataset::builtin_articles()?))
    }

    /// Load a JSON array of articles
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<ContentItem> = serde_json::from_str(&content)?;
        tracing::info!("Loaded {} articles from {:?}", items.len(), path);
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Shared handle for spawned searches
    pub fn shared(&self) -> Arc<[ContentItem]> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Everything, newest first
    pub fn latest(&self) -> Vec<&ContentItem> {
        sorted(self.items.iter().collect(), SortKey::CreatedAt)
    }

    /// Newest featured article
    pub fn featured(&self) -> Option<&ContentItem> {
        let featured = self.items.iter().filter(|item| item.featured).collect();
        sorted(featured, SortKey::CreatedAt).first().copied()
    }

    /// Category listing, newest first
    pub fn in_category(&self, category: Category) -> Vec<&ContentItem> {
        let items = filter_by_category(self.items.iter(), CategoryFilter::Only(category));
        sorted(items, SortKey::CreatedAt)
    }

    pub fn latest_in(&self, category: Category, limit: usize) -> Vec<&ContentItem> {
        let mut items = self.in_category(category);
        items.truncate(limit);
        items
    }

    /// Most viewed first. Equal view counts keep catalog order.
    pub fn popular(&self, limit: usize) -> Vec<&ContentItem> {
        let mut items = sorted(self.items.iter().collect(), SortKey::Views);
        items.truncate(limit);
        items
    }

    pub fn home(&self) -> HomePage<'_> {
        HomePage {
            featured: self.featured(),
            sections: Category::iter()
                .map(|category| (category, self.latest_in(category, HOME_SECTION_LIMIT)))
                .collect(),
            popular: self.popular(HOME_SECTION_LIMIT),
        }
    }

    /// Articles mentioning the topic phrase anywhere
    pub fn related_to_topic(&self, topic_slug: &str) -> Vec<&ContentItem> {
        filter_by_search(self.items.iter(), &topic_query(topic_slug))
    }

    pub fn list(&self, view: &ArticleListView) -> Vec<&ContentItem> {
        view.apply(&self.items)
    }

    pub fn search_page(&self, delay: std::time::Duration) -> SearchPage {
        SearchPage::new(self.shared(), delay)
    }
}

fn sorted(mut items: Vec<&ContentItem>, key: SortKey) -> Vec<&ContentItem> {
    sort_items(&mut items, SortConfig::new(key, SortDirection::Descending));
    items
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Category, ContentItem, parse_date};

    pub fn item(
        slug: &str,
        title: &str,
        excerpt: &str,
        body: &str,
        category: Option<Category>,
    ) -> ContentItem {
        ContentItem {
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            full_content: body.to_string(),
            image: String::new(),
            category,
            date: parse_date("2023-01-01").unwrap(),
            views: 0,
            featured: false,
        }
    }

    pub fn viewed(title: &str, views: u64) -> ContentItem {
        let mut item = item(title, title, "", "", None);
        item.views = views;
        item
    }

    pub fn dated(title: &str, date: &str) -> ContentItem {
        let mut item = item(title, title, "", "", None);
        item.date = parse_date(date).unwrap();
        item
    }
}
