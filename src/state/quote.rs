// Quote panel state management.
// Tracks the fetch lifecycle and what the quote display region shows.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::api::Quote;
use crate::error::FetchError;

/// Text shown before any quote has been loaded.
pub const PLACEHOLDER_TEXT: &str = "Your quote will appear here";
/// Text shown in the display region after a failed fetch.
pub const UNAVAILABLE_TEXT: &str = "Could not load quote.";
/// User-facing error for every kind of fetch failure.
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not fetch quote. Please check your internet connection and try again.";

/// Loading state for async data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Content of the quote display region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuoteDisplay {
    #[default]
    Placeholder,
    Quote(Quote),
    Unavailable,
}

impl QuoteDisplay {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, QuoteDisplay::Placeholder)
    }
}

/// State of the quote generator widget.
#[derive(Debug, Clone, Default)]
pub struct QuotePanel {
    /// Fetch lifecycle.
    pub status: LoadingState<Quote>,
    /// What the display region shows when it is visible.
    pub display: QuoteDisplay,
    /// When the currently displayed quote arrived.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl QuotePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state. Returns false if a fetch is already in flight,
    /// in which case nothing changes and no new request should be issued.
    pub fn begin(&mut self) -> bool {
        if self.status.is_loading() {
            return false;
        }
        self.status = LoadingState::Loading;
        true
    }

    /// Apply the outcome of a fetch. The spinner is always hidden afterwards.
    pub fn settle(&mut self, outcome: Result<Quote, FetchError>) {
        match outcome {
            Ok(quote) => {
                info!(author = %quote.author, "quote loaded");
                self.display = QuoteDisplay::Quote(quote.clone());
                self.fetched_at = Some(Utc::now());
                self.status = LoadingState::Loaded(quote);
            }
            Err(err) => {
                error!(error = %err, "quote fetch failed");
                self.display = QuoteDisplay::Unavailable;
                self.fetched_at = None;
                self.status = LoadingState::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn is_spinner_visible(&self) -> bool {
        self.status.is_loading()
    }

    pub fn is_display_visible(&self) -> bool {
        !self.status.is_loading()
    }

    /// Error text under the display region, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadingState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
