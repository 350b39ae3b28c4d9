pub const TOP_LEVEL_DOMAIN: &str = "com";
pub const AUTHOR: &str = "thinkverse";
pub const APP_NAME: &str = "thinkverse";

pub const CONFIG_FILE_NAME: &str = "thinkverse.toml";
pub const STORE_FILE_NAME: &str = "store.json";

/// Key under which the recent-search history is persisted
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
