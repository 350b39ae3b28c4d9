use crate::filter::{CategoryFilter, filter_by_category, filter_by_search};
use crate::models::{Category, ContentItem};
use crate::sort::{SortConfig, SortKey, sort_items};

/// State of the admin article table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleListView {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortConfig,
}

impl ArticleListView {
    pub fn new(search: impl Into<String>, category: CategoryFilter, sort: SortConfig) -> Self {
        Self {
            search: search.into(),
            category,
            sort,
        }
    }

    /// Search filter, then category filter, then sort. The order is fixed.
    pub fn apply<'a>(&self, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        let searched = filter_by_search(items, &self.search);
        let mut visible = filter_by_category(searched, self.category);
        sort_items(&mut visible, self.sort);
        visible
    }

    /// Column header click
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle_or_set(key);
    }
}

/// `space-exploration` -> `Space Exploration`
pub fn topic_display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Topic slugs are matched as plain phrases: dashes become spaces.
pub fn topic_query(slug: &str) -> String {
    slug.replace('-', " ")
}

pub const DEFAULT_TOPIC_DESCRIPTION: &str = "Explore the latest articles, research, and breakthroughs in this fascinating field of science and technology.";

/// Blurb shown above a topic's articles, [`DEFAULT_TOPIC_DESCRIPTION`] for
/// topics without one.
pub fn topic_description(slug: &str) -> &'static str {
    match slug {
        "quantum-physics" => "Quantum physics explores the behavior of matter and energy at the smallest scales, where phenomena challenge intuition and have led to revolutionary technologies.",
        "biotechnology" => "Biotechnology harnesses cellular and biomolecular processes to build technologies and products that improve our lives and the health of the planet.",
        "climate" => "Climate science studies long-term weather patterns, their variations and the factors that drive them, including human activity.",
        "ai" => "Artificial intelligence covers computer systems that perform tasks usually requiring human intelligence, such as perception, speech recognition and decision-making.",
        "space" => "Space exploration investigates objects and phenomena beyond Earth's atmosphere and develops the technology to travel there.",
        "medicine" => "Medical science keeps people healthy and prevents, diagnoses and treats disease, evolving through research and new technology.",
        "robotics" => "Robotics combines engineering and computer science to design, build and operate machines that work autonomously or semi-autonomously.",
        "neuroscience" => "Neuroscience studies the nervous system, from the brain and spinal cord to sensory networks, to understand behavior, learning and consciousness.",
        _ => DEFAULT_TOPIC_DESCRIPTION,
    }
}

/// Number of articles per front-page section
pub const HOME_SECTION_LIMIT: usize = 3;

/// Front page: hero article, newest articles per category, most viewed.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage<'a> {
    pub featured: Option<&'a ContentItem>,
    /// One entry per category, in category order
    pub sections: Vec<(Category, Vec<&'a ContentItem>)>,
    pub popular: Vec<&'a ContentItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::sort::SortDirection;
    use crate::test_support::item;
    use rstest::rstest;

    fn table() -> Vec<ContentItem> {
        let mut a = item("a", "Quantum Leap", "", "", Some(Category::Discoveries));
        a.views = 10;
        let mut b = item("b", "Quantum Drone", "", "", Some(Category::Inventions));
        b.views = 30;
        let mut c = item("c", "Coral", "quantum reef", "", Some(Category::Inventions));
        c.views = 20;
        let mut d = item("d", "Drone", "", "", Some(Category::Inventions));
        d.views = 99;
        vec![a, b, c, d]
    }

    fn slugs(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn test_default_view_shows_everything_newest_first() {
        let items = table();
        let view = ArticleListView::default();
        assert_eq!(view.apply(&items).len(), 4);
        assert_eq!(view.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_search_then_category_then_sort() {
        let items = table();
        let view = ArticleListView::new(
            "quantum",
            CategoryFilter::Only(Category::Inventions),
            SortConfig::new(SortKey::Views, SortDirection::Descending),
        );
        assert_eq!(slugs(&view.apply(&items)), vec!["b", "c"]);
    }

    #[test]
    fn test_toggle_sort_on_view() {
        let items = table();
        let mut view = ArticleListView::default();
        view.toggle_sort(SortKey::Views);
        assert_eq!(slugs(&view.apply(&items)), vec!["d", "b", "c", "a"]);
        view.toggle_sort(SortKey::Views);
        assert_eq!(slugs(&view.apply(&items)), vec!["a", "c", "b", "d"]);
    }

    #[rstest]
    #[case("space-exploration", "Space Exploration")]
    #[case("robotics", "Robotics")]
    #[case("", "")]
    fn test_topic_display_name(#[case] slug: &str, #[case] expected: &str) {
        assert_eq!(topic_display_name(slug), expected);
    }

    #[rstest]
    #[case("robotics", "Robotics combines")]
    #[case("ai", "Artificial intelligence")]
    fn test_topic_description_known(#[case] slug: &str, #[case] prefix: &str) {
        assert!(topic_description(slug).starts_with(prefix));
    }

    #[test]
    fn test_topic_description_fallback() {
        assert_eq!(topic_description("string-theory"), DEFAULT_TOPIC_DESCRIPTION);
        assert_eq!(topic_description(""), DEFAULT_TOPIC_DESCRIPTION);
    }

    #[test]
    fn test_topic_query() {
        assert_eq!(topic_query("climate-change"), "climate change");
    }
}
