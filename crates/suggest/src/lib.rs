//! Search autocomplete.
//!
//! Turns keystrokes into a ranked, keyboard-navigable suggestion list and
//! confirmed queries into navigation requests, keeping a small persisted
//! history of recent searches.

pub mod corpus;
pub mod engine;
pub mod events;
pub mod history;
pub mod navigation;
pub mod storage;

pub use corpus::{MAX_SUGGESTIONS, SEARCH_SUGGESTIONS, filter_suggestions, input_length};
pub use engine::{DropdownEntry, Key, QueryState, SuggestionEngine};
pub use events::{PointerEvents, PointerTarget, Subscription};
pub use history::{MAX_RECENT_SEARCHES, RecentSearches};
pub use navigation::NavigationRequest;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
