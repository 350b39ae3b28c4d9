//! Autocomplete state machine.
//!
//! Keyboard navigation runs over one combined index space: corpus
//! suggestions first, then recent searches. Index `i < suggestions.len()`
//! is a suggestion, anything after is recent entry `i - suggestions.len()`.

use crate::corpus::{MIN_QUERY_LEN, SEARCH_SUGGESTIONS, filter_suggestions, input_length};
use crate::events::{PointerEvents, PointerTarget, Subscription};
use crate::history::RecentSearches;
use crate::navigation::NavigationRequest;
use crate::storage::KeyValueStore;
use tracing::debug;

/// Keys the autocomplete reacts to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl Key {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowUp" => Some(Key::ArrowUp),
            "Enter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Per-session input state. `suggestions` is derived from `text` and never
/// set independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub suggestions: Vec<String>,
    /// Position in the combined suggestions + recents list
    pub highlighted: Option<usize>,
    pub open: bool,
}

/// One row of the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEntry<'a> {
    Suggestion(&'a str),
    Recent { index: usize, text: &'a str },
}

impl<'a> DropdownEntry<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            DropdownEntry::Suggestion(text) => text,
            DropdownEntry::Recent { text, .. } => text,
        }
    }
}

pub struct SuggestionEngine<S> {
    corpus: &'static [&'static str],
    store: S,
    recent: RecentSearches,
    state: QueryState,
    subscription: Option<Subscription>,
}

impl<S: KeyValueStore> SuggestionEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_corpus(store, SEARCH_SUGGESTIONS)
    }

    /// History is read from `store` once, here.
    pub fn with_corpus(store: S, corpus: &'static [&'static str]) -> Self {
        let recent = RecentSearches::load(&store);
        Self {
            corpus,
            store,
            recent,
            state: QueryState::default(),
            subscription: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ===== Input =====

    pub fn on_input_change(&mut self, text: &str) {
        self.state.text = text.to_string();
        if input_length(text) >= MIN_QUERY_LEN {
            self.state.suggestions = filter_suggestions(self.corpus, text);
            self.state.open = true;
            self.state.highlighted = None;
        } else {
            self.state.suggestions.clear();
            self.close();
        }
    }

    /// A closed dropdown never keeps a highlight, so Enter afterwards submits
    /// the typed text.
    fn close(&mut self) {
        self.state.open = false;
        self.state.highlighted = None;
    }

    pub fn on_focus(&mut self) {
        if input_length(&self.state.text) >= MIN_QUERY_LEN {
            self.state.suggestions = filter_suggestions(self.corpus, &self.state.text);
            self.state.open = true;
        }
    }

    /// Clear button. The dropdown stays as it is until Escape or an outside
    /// click closes it.
    pub fn clear_input(&mut self) {
        self.state.text.clear();
        self.state.suggestions.clear();
    }

    pub fn on_key_down(&mut self, key: Key) -> Option<NavigationRequest> {
        match key {
            Key::ArrowDown => {
                self.move_highlight_down();
                None
            }
            Key::ArrowUp => {
                self.move_highlight_up();
                None
            }
            Key::Enter => match self.state.highlighted {
                Some(index) => {
                    let text = self.entry_at(index)?.text().to_string();
                    self.submit(&text)
                }
                None if !self.state.text.is_empty() => {
                    let text = self.state.text.clone();
                    self.submit(&text)
                }
                None => None,
            },
            Key::Escape => {
                self.close();
                None
            }
        }
    }

    fn move_highlight_down(&mut self) {
        let total = self.entry_count();
        if total == 0 {
            return;
        }
        self.state.highlighted = Some(match self.state.highlighted {
            Some(i) if i + 1 < total => i + 1,
            _ => 0,
        });
    }

    fn move_highlight_up(&mut self) {
        let total = self.entry_count();
        if total == 0 {
            return;
        }
        self.state.highlighted = Some(match self.state.highlighted {
            Some(i) if i > 0 => (i - 1).min(total - 1),
            _ => total - 1,
        });
    }

    // ===== Submission and history =====

    /// Record `text` in history and request the results view. Blank text is
    /// ignored.
    pub fn submit(&mut self, text: &str) -> Option<NavigationRequest> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }

        self.recent.promote_or_insert(query.to_string());
        self.recent.persist(&mut self.store);

        self.state.text.clear();
        self.state.suggestions.clear();
        self.state.highlighted = None;
        self.state.open = false;

        debug!("Submitting search '{}'", query);
        Some(NavigationRequest::search(query))
    }

    /// Click on a dropdown row
    pub fn select_entry(&mut self, index: usize) -> Option<NavigationRequest> {
        let text = self.entry_at(index)?.text().to_string();
        self.submit(&text)
    }

    /// Remove one history entry. Input text and dropdown state are untouched
    /// and nothing is submitted.
    pub fn clear_recent_search(&mut self, index: usize) -> Option<String> {
        let removed = self.recent.remove(index)?;
        self.recent.persist(&mut self.store);
        Some(removed)
    }

    pub fn clear_history(&mut self) {
        self.recent.clear();
        self.recent.persist(&mut self.store);
    }

    // ===== Dropdown =====

    pub fn entry_count(&self) -> usize {
        self.state.suggestions.len() + self.recent.len()
    }

    pub fn entry_at(&self, index: usize) -> Option<DropdownEntry<'_>> {
        let suggestions = &self.state.suggestions;
        if index < suggestions.len() {
            return Some(DropdownEntry::Suggestion(&suggestions[index]));
        }
        let recent_index = index - suggestions.len();
        self.recent.get(recent_index).map(|text| DropdownEntry::Recent {
            index: recent_index,
            text,
        })
    }

    pub fn entries(&self) -> Vec<DropdownEntry<'_>> {
        (0..self.entry_count()).filter_map(|i| self.entry_at(i)).collect()
    }

    /// Shown when the dropdown is open with nothing to list
    pub fn empty_message(&self) -> Option<String> {
        (self.entry_count() == 0)
            .then(|| format!("No results found for \"{}\"", self.state.text))
    }

    // ===== Outside interaction =====

    /// Start listening for pointer-downs anywhere in the process.
    pub fn mount(&mut self, events: &PointerEvents) {
        self.subscription = Some(events.attach());
    }

    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.detach();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Pointer-down outside both the input and the dropdown closes the
    /// dropdown. Text and history are never touched.
    pub fn handle_pointer_down(&mut self, target: PointerTarget) {
        if target.is_outside() {
            self.close();
        }
    }

    /// Apply pointer events received since the last call.
    pub fn process_pointer_events(&mut self) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        for target in subscription.drain() {
            self.handle_pointer_down(target);
        }
    }
}
