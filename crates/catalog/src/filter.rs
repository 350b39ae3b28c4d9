use crate::error::{CatalogError, Result};
use crate::models::{Category, ContentItem};
use std::fmt;
use std::str::FromStr;

/// Category filter for the article table.
///
/// `All` is a distinct variant rather than a reserved slug, so it can never
/// collide with a real category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::All => true,
            // uncategorized items only pass `All`
            CategoryFilter::Only(category) => item.category == Some(*category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(CategoryFilter::All),
            slug => slug.parse().map(CategoryFilter::Only),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.slug()),
        }
    }
}

/// Keep items whose title, excerpt or body contains `query`, ignoring case.
///
/// An empty or whitespace-only query keeps everything in input order.
pub fn filter_by_search<'a, I>(items: I, query: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    if query.trim().is_empty() {
        return items.into_iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

pub fn filter_by_category<'a, I>(items: I, filter: CategoryFilter) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items.into_iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use rstest::rstest;

    fn slugs(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn test_search_matches_title_or_excerpt() {
        let items = vec![
            item("mars-rover", "Mars Rover", "Six wheels", "", None),
            item("coral-reef", "Coral Reef", "Reefs under mars dust", "", None),
            item("leaf", "Artificial Leaf", "Carbon", "", None),
        ];
        let found = filter_by_search(&items, "mars");
        assert_eq!(slugs(&found), vec!["mars-rover", "coral-reef"]);
    }

    #[test]
    fn test_search_matches_body() {
        let items = vec![
            item("a", "A", "", "Deep inside the QUBIT lattice", None),
            item("b", "B", "", "Nothing here", None),
        ];
        assert_eq!(slugs(&filter_by_search(&items, "qubit")), vec!["a"]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_query_is_no_filter(#[case] query: &str) {
        let items = vec![
            item("b", "B", "", "", None),
            item("a", "A", "", "", None),
        ];
        assert_eq!(slugs(&filter_by_search(&items, query)), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<ContentItem> = Vec::new();
        assert!(filter_by_search(&items, "anything").is_empty());
        assert!(filter_by_category(&items, CategoryFilter::Only(Category::Inventions)).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let items = vec![
            item("a", "A", "", "", Some(Category::Inventions)),
            item("b", "B", "", "", None),
            item("c", "C", "", "", Some(Category::Discoveries)),
        ];
        let only = filter_by_category(&items, CategoryFilter::Only(Category::Inventions));
        assert_eq!(slugs(&only), vec!["a"]);

        let all = filter_by_category(&items, CategoryFilter::All);
        assert_eq!(slugs(&all), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_uncategorized_never_matches_concrete_category() {
        let items = vec![item("u", "U", "", "", None)];
        for category in [Category::Discoveries, Category::Inventions, Category::Interventions] {
            assert!(filter_by_category(&items, CategoryFilter::Only(category)).is_empty());
        }
    }

    #[rstest]
    #[case("all", CategoryFilter::All)]
    #[case("inventions", CategoryFilter::Only(Category::Inventions))]
    fn test_parse_category_filter(#[case] input: &str, #[case] expected: CategoryFilter) {
        assert_eq!(input.parse::<CategoryFilter>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn test_parse_category_filter_rejects_unknown() {
        assert!("robots".parse::<CategoryFilter>().is_err());
    }
}
