//! Content records consumed by the catalog views.

use crate::error::{CatalogError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// Fixed set of article categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Discoveries,
    Inventions,
    Interventions,
}

impl Category {
    /// URL-safe identifier, also the value used by category filters
    pub fn slug(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Discoveries => "Discoveries",
            Category::Inventions => "Inventions",
            Category::Interventions => "Interventions",
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Category::iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A published article.
///
/// The slug is the stable identity. `views` is maintained by external view
/// tracking; nothing in this crate mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub full_content: String,
    #[serde(default)]
    pub image: String,
    /// `None` for uncategorized items
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(default)]
    pub views: u64,
    /// Candidate for the front-page hero slot
    #[serde(default)]
    pub featured: bool,
}

impl ContentItem {
    /// Case-insensitive containment against title, excerpt or body.
    /// `needle_lower` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle_lower: &str) -> bool {
        [&self.title, &self.excerpt, &self.full_content]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Human date format used by the published dataset, e.g. `May 15, 2023`.
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Parse a publication date in either `May 15, 2023` or ISO `2023-05-15` form.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|source| CatalogError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

mod date_format {
    use super::{DISPLAY_DATE_FORMAT, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DISPLAY_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("May 15, 2023", 2023, 5, 15)]
    #[case("February 5, 2023", 2023, 2, 5)]
    #[case("2023-03-03", 2023, 3, 3)]
    fn test_parse_date(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        assert_eq!(parse_date(input).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("someday"),
            Err(CatalogError::InvalidDate { .. })
        ));
    }

    #[rstest]
    #[case("discoveries", Category::Discoveries)]
    #[case("inventions", Category::Inventions)]
    #[case("interventions", Category::Interventions)]
    fn test_category_from_slug(#[case] slug: &str, #[case] expected: Category) {
        assert_eq!(slug.parse::<Category>().unwrap(), expected);
        assert_eq!(expected.slug(), slug);
        assert_eq!(expected.to_string(), expected.slug());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(matches!(
            "Discoveries".parse::<Category>(),
            Err(CatalogError::UnknownCategory(s)) if s == "Discoveries"
        ));
    }

    #[test]
    fn test_content_item_json_shape() {
        let json = r#"{
            "slug": "mars-rover",
            "title": "Mars Rover",
            "excerpt": "Red dust",
            "fullContent": "Body",
            "category": "discoveries",
            "date": "May 2, 2023",
            "views": 12
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Some(Category::Discoveries));
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2023, 5, 2).unwrap());
        assert!(item.image.is_empty());

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["date"], "May 2, 2023");
        assert_eq!(back["fullContent"], "Body");
    }

    #[test]
    fn test_uncategorized_item_defaults_to_none() {
        let json = r#"{"slug":"x","title":"X","excerpt":"","fullContent":"","date":"2023-01-01"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, None);
        assert_eq!(item.views, 0);
        assert!(!item.featured);
    }
}
