//! Simulated-latency search for the results page.
//!
//! Every search is a spawned task behind a [`PendingSearch`] handle. The
//! results state only accepts the ticket it issued last, so a task that was
//! superseded (or that slipped past cancellation) can never overwrite newer
//! results.

use crate::filter::filter_by_search;
use crate::models::ContentItem;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default simulated latency of the results page
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(pub u64);

/// Handle to a search that resolves after its delay.
#[derive(Debug)]
pub struct PendingSearch {
    ticket: SearchTicket,
    handle: JoinHandle<Vec<ContentItem>>,
}

impl PendingSearch {
    pub fn ticket(&self) -> SearchTicket {
        self.ticket
    }

    /// Abort the task. A cancelled search resolves to `None`.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn resolve(self) -> Option<Vec<ContentItem>> {
        self.handle.await.ok()
    }
}

/// Spawn a search over `items` that resolves to the OR-substring matches of
/// `query` once `delay` has elapsed. Must be called within a tokio runtime.
pub fn async_search(
    items: Arc<[ContentItem]>,
    query: impl Into<String>,
    delay: Duration,
    ticket: SearchTicket,
) -> PendingSearch {
    let query = query.into();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        filter_by_search(items.iter(), &query)
            .into_iter()
            .cloned()
            .collect()
    });
    PendingSearch { ticket, handle }
}

/// Results-page state. Only the most recently issued ticket may update it.
#[derive(Debug, Default)]
pub struct SearchResultsState {
    pub query: String,
    pub results: Vec<ContentItem>,
    /// A search is in flight for `query`
    pub loading: bool,
    current: Option<SearchTicket>,
    ticket_counter: u64,
}

impl SearchResultsState {
    /// Start tracking a new query; any earlier ticket becomes stale.
    pub fn begin(&mut self, query: impl Into<String>) -> SearchTicket {
        self.ticket_counter += 1;
        let ticket = SearchTicket(self.ticket_counter);
        self.query = query.into();
        self.current = Some(ticket);
        self.loading = true;
        ticket
    }

    /// Apply results for `ticket`. Returns `false` and leaves the state
    /// untouched when the ticket is stale.
    pub fn apply(&mut self, ticket: SearchTicket, results: Vec<ContentItem>) -> bool {
        if self.current != Some(ticket) {
            debug!(?ticket, current = ?self.current, "discarding stale search results");
            return false;
        }
        self.results = results;
        self.loading = false;
        self.current = None;
        true
    }

    /// Forget the in-flight ticket, e.g. on unmount.
    pub fn invalidate(&mut self) {
        self.current = None;
        self.loading = false;
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.current == Some(ticket)
    }
}

/// The dedicated search-results page: one query at a time, newest wins.
pub struct SearchPage {
    items: Arc<[ContentItem]>,
    delay: Duration,
    state: SearchResultsState,
    pending: Option<PendingSearch>,
}

impl SearchPage {
    pub fn new(items: Arc<[ContentItem]>, delay: Duration) -> Self {
        Self {
            items,
            delay,
            state: SearchResultsState::default(),
            pending: None,
        }
    }

    /// Replace the current query, cancelling any search still in flight.
    ///
    /// A blank query shows no results and starts no search.
    pub fn set_query(&mut self, query: &str) -> Option<SearchTicket> {
        if let Some(previous) = self.pending.take() {
            debug!(ticket = ?previous.ticket(), "superseding pending search");
            previous.cancel();
        }

        let ticket = self.state.begin(query);
        if query.trim().is_empty() {
            self.state.apply(ticket, Vec::new());
            return None;
        }

        self.pending = Some(async_search(self.items.clone(), query, self.delay, ticket));
        Some(ticket)
    }

    /// Wait for the in-flight search and apply it. Returns `true` when the
    /// state changed.
    pub async fn next_update(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let ticket = pending.ticket();
        match pending.resolve().await {
            Some(results) => self.state.apply(ticket, results),
            None => false,
        }
    }

    /// Tear the page down: cancel and invalidate whatever is in flight.
    pub fn unmount(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.state.invalidate();
    }

    pub fn state(&self) -> &SearchResultsState {
        &self.state
    }

    pub fn results(&self) -> &[ContentItem] {
        &self.state.results
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }
}

impl Drop for SearchPage {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

/// Results-page footer wording.
pub fn result_summary(count: usize) -> String {
    format!("Found {} result{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    fn items() -> Arc<[ContentItem]> {
        vec![
            item("alpha", "Alpha Centauri", "Nearest star", "", None),
            item("beta", "Beta Decay", "Nuclear physics", "", None),
            item("both", "Gamma", "alpha and beta", "", None),
        ]
        .into()
    }

    fn slugs(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|i| i.slug.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_search_waits_for_delay() {
        let pending = async_search(items(), "beta", Duration::from_millis(500), SearchTicket(1));

        tokio::time::advance(Duration::from_millis(499)).await;
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        let results = pending.resolve().await.unwrap();
        assert_eq!(slugs(&results), vec!["beta", "both"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_search_resolves_to_none() {
        let pending = async_search(items(), "alpha", Duration::from_millis(500), SearchTicket(1));
        pending.cancel();
        assert!(pending.resolve().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_resolution_of_stale_search_is_discarded() {
        let mut state = SearchResultsState::default();
        let shared = items();

        let first = state.begin("alpha");
        let slow = async_search(shared.clone(), "alpha", Duration::from_millis(500), first);
        tokio::time::advance(Duration::from_millis(100)).await;

        let second = state.begin("beta");
        let fast = async_search(shared, "beta", Duration::from_millis(500), second);

        // the stale timer still fires; only its application is refused
        let slow_results = slow.resolve().await.unwrap();
        assert!(!slow_results.is_empty());
        assert!(!state.apply(first, slow_results));
        assert!(state.results.is_empty());
        assert!(state.loading);

        let fast_results = fast.resolve().await.unwrap();
        assert!(state.apply(second, fast_results));
        assert_eq!(state.query, "beta");
        assert_eq!(slugs(&state.results), vec!["beta", "both"]);
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_only_applies_latest_query() {
        let mut page = SearchPage::new(items(), Duration::from_millis(500));

        let first = page.set_query("alpha").unwrap();
        tokio::time::advance(Duration::from_millis(100)).await;
        let second = page.set_query("beta").unwrap();
        assert_ne!(first, second);
        assert!(page.is_loading());

        assert!(page.next_update().await);
        assert_eq!(page.state().query, "beta");
        assert_eq!(slugs(page.results()), vec!["beta", "both"]);
        assert!(!page.is_loading());

        // nothing else is pending; the first search never lands
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!page.next_update().await);
        assert_eq!(slugs(page.results()), vec!["beta", "both"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_discards_in_flight_search() {
        let mut page = SearchPage::new(items(), Duration::from_millis(500));
        let ticket = page.set_query("alpha").unwrap();
        page.unmount();

        assert!(!page.state().is_current(ticket));
        assert!(!page.is_loading());
        assert!(!page.next_update().await);
        assert!(page.results().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_clears_results_without_searching() {
        let mut page = SearchPage::new(items(), Duration::from_millis(500));
        page.set_query("alpha");
        assert!(page.next_update().await);
        assert!(!page.results().is_empty());

        assert!(page.set_query("  ").is_none());
        assert!(page.results().is_empty());
        assert!(!page.is_loading());
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(0), "Found 0 results");
        assert_eq!(result_summary(1), "Found 1 result");
        assert_eq!(result_summary(9), "Found 9 results");
    }
}
