/// Topic strings offered as suggestions. Order is the ranking.
pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "Quantum Computing",
    "Artificial Intelligence",
    "Climate Change",
    "Renewable Energy",
    "Biotechnology",
    "Space Exploration",
    "Neuroscience",
    "Robotics",
    "Nanotechnology",
    "Genetic Engineering",
    "Machine Learning",
    "Sustainable Development",
    "Quantum Physics",
    "Artificial Neural Networks",
    "Renewable Resources",
];

pub const MAX_SUGGESTIONS: usize = 5;

/// Input shorter than this never produces suggestions, measured by
/// [`input_length`]
pub const MIN_QUERY_LEN: usize = 2;

/// Length of `text` in UTF-16 code units, the way a text input reports it.
/// A single emoji outside the BMP already counts as two.
pub fn input_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Case-insensitive substring matches of `query` in corpus order, at most
/// [`MAX_SUGGESTIONS`]. Inputs of one character or fewer match nothing.
pub fn filter_suggestions(corpus: &[&str], query: &str) -> Vec<String> {
    if input_length(query) < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|item| item.to_string())
        .collect()
}
