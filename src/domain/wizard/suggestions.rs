//! Debounced autocomplete bookkeeping for the company website field.
//!
//! The feed never performs I/O. It tells its owner when to arm the quiet
//! window timer, hands out a [`SearchTicket`] once the window elapses, and
//! decides on completion whether a response may be applied.
//!
//! Two counters drive it:
//!
//! - `debounce_generation` is bumped by every keystroke; a timer that fires
//!   for an older generation was superseded and does nothing.
//! - `latest_seq` is bumped for every issued search (and to invalidate
//!   outstanding ones); only a response carrying the current value is
//!   applied, so the most recently issued query always wins.

use std::time::Duration;

use super::brand::Suggestion;
use super::errors::WizardError;

/// Queries shorter than this (in characters, after trimming) are ignored.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Quiet window a burst of keystrokes must respect before a search is issued.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// A search that may be sent to the brand-lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// What the owner must do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Input too short; the list was cleared and nothing must be sent.
    Cleared,
    /// Arm the quiet window timer for this generation.
    Scheduled { generation: u64 },
}

/// Result of handing a completed search to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    Applied { count: usize },
    Failed,
    Stale,
}

#[derive(Debug, Clone)]
pub struct SuggestionFeed {
    min_query_length: usize,
    pending_query: Option<String>,
    debounce_generation: u64,
    latest_seq: u64,
    suggestions: Vec<Suggestion>,
    visible: bool,
}

impl Default for SuggestionFeed {
    fn default() -> Self {
        Self::new(MIN_QUERY_LENGTH)
    }
}

impl SuggestionFeed {
    pub fn new(min_query_length: usize) -> Self {
        Self {
            min_query_length,
            pending_query: None,
            debounce_generation: 0,
            latest_seq: 0,
            suggestions: Vec::new(),
            visible: false,
        }
    }

    /// Records a keystroke.
    pub fn on_query_change(&mut self, text: &str) -> QueryOutcome {
        self.debounce_generation += 1;
        let query = text.trim();

        if query.chars().count() < self.min_query_length {
            self.pending_query = None;
            self.invalidate_outstanding();
            self.clear();
            return QueryOutcome::Cleared;
        }

        self.pending_query = Some(query.to_string());
        QueryOutcome::Scheduled {
            generation: self.debounce_generation,
        }
    }

    /// Called when the quiet window armed for `generation` elapses.
    ///
    /// Returns the search to issue, or `None` if a later keystroke
    /// superseded this window.
    pub fn on_quiet_window_elapsed(&mut self, generation: u64) -> Option<SearchTicket> {
        if generation != self.debounce_generation {
            return None;
        }
        let query = self.pending_query.take()?;
        self.latest_seq += 1;
        Some(SearchTicket {
            seq: self.latest_seq,
            query,
        })
    }

    /// Applies a completed search if it is still the latest issued one.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Suggestion>, WizardError>) -> FeedUpdate {
        if seq != self.latest_seq {
            return FeedUpdate::Stale;
        }
        match result {
            Ok(suggestions) => {
                let count = suggestions.len();
                self.suggestions = suggestions;
                self.visible = true;
                FeedUpdate::Applied { count }
            }
            Err(_) => {
                self.clear();
                FeedUpdate::Failed
            }
        }
    }

    /// Hides the list and drops any pending or in-flight search.
    pub fn dismiss(&mut self) {
        self.debounce_generation += 1;
        self.pending_query = None;
        self.invalidate_outstanding();
        self.clear();
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    fn invalidate_outstanding(&mut self) {
        self.latest_seq += 1;
    }

    fn clear(&mut self) {
        self.suggestions.clear();
        self.visible = false;
    }
}
