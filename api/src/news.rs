use crate::NewsReactions;
use crate::backend::BackendNewsReactions;
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};

const NEWS_BACKEND_GAP_MESSAGE: &str = "News reactions are not served by the backend yet \
(missing routes: GET /news/{id}/reactions, POST /news/{id}/view, POST /news/{id}/like); \
showing zero views and likes until they ship.";

/// Map a backend reactions payload, reading missing counters as zero.
pub fn adapt_news_reactions(raw: BackendNewsReactions) -> NewsReactions {
    NewsReactions {
        views: raw.views.unwrap_or(0),
        likes: raw.likes.unwrap_or(0),
        liked: raw.liked.unwrap_or(false),
    }
}

/// Reactions to show when loading them failed.
///
/// Always the zeroed value. A 404 ("no reactions yet") and a failure that
/// never reached the backend are deliberately not told apart here.
// TODO: show network failures differently from 404s once product decides how.
pub fn adapt_news_reactions_fallback<E: ?Sized>(_error: &E) -> NewsReactions {
    NewsReactions::default()
}

/// Diagnostic naming the news routes the backend does not implement yet.
pub fn news_backend_gap_message() -> &'static str {
    NEWS_BACKEND_GAP_MESSAGE
}

/// Logs the backend gap warning the first time it is hit and stays quiet afterwards.
#[derive(Debug, Default)]
pub struct GapNotice {
    logged: AtomicBool,
}

impl GapNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this call was the one that logged.
    pub fn warn_once(&self) -> bool {
        if self.logged.swap(true, Ordering::Relaxed) {
            return false;
        }
        warn!("{}", news_backend_gap_message());
        true
    }

    pub fn has_logged(&self) -> bool {
        self.logged.load(Ordering::Relaxed)
    }
}
