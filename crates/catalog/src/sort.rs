use crate::error::{CatalogError, Result};
use crate::models::ContentItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Publication date
    #[default]
    CreatedAt,
    Title,
    Views,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Title => "title",
            SortKey::Views => "views",
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "created_at" | "date" => Ok(SortKey::CreatedAt),
            "title" => Ok(SortKey::Title),
            "views" => Ok(SortKey::Views),
            other => Err(CatalogError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply direction to an ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(CatalogError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Current sort state of the article table. Defaults to newest first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// If same key, toggle direction; otherwise switch key, descending
    pub fn toggle_or_set(&mut self, key: SortKey) {
        *self = toggle_sort(*self, key);
    }
}

/// Pure form of [`SortConfig::toggle_or_set`].
pub fn toggle_sort(current: SortConfig, requested: SortKey) -> SortConfig {
    if current.key == requested {
        SortConfig::new(current.key, current.direction.toggle())
    } else {
        SortConfig::new(requested, SortDirection::Descending)
    }
}

/// Stable sort in place. Equal keys keep their input order in both directions.
pub fn sort_items(items: &mut [&ContentItem], config: SortConfig) {
    // slice::sort_by is stable
    items.sort_by(|a, b| config.direction.apply(compare_items(a, b, config.key)));
}

fn compare_items(a: &ContentItem, b: &ContentItem, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.date.cmp(&b.date),
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Views => a.views.cmp(&b.views),
    }
}

/// Collation-style title comparison in three passes, as root-locale
/// collation does: base letters ignoring accents and case, then accents
/// (unaccented first), then case (lowercase first).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| {
            // "apple" < "Apple"
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
