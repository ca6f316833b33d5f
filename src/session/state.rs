use crate::api::Hit;
use crate::ui::mvi::UiState;

pub const NOTICE_EMPTY_QUERY: &str = "Please enter a search query.";
pub const NOTICE_NO_RESULTS: &str =
    "Sorry, there are no images matching your search query. Please try again.";
pub const NOTICE_END_OF_RESULTS: &str =
    "We're sorry, but you've reached the end of search results.";
pub const NOTICE_SEARCH_FAILED: &str =
    "Something went wrong while searching. Please try again.";

/// Success notice shown when a page of results arrives.
pub fn found_notice(total_hits: u64) -> String {
    format!("Hooray! We found {} images.", total_hits)
}

/// Lifecycle phase of the current search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No search submitted yet.
    #[default]
    Idle,
    /// First page of a new search is in flight.
    Searching,
    /// At least one page of results is on screen.
    Results,
    /// The last search matched nothing.
    Empty,
    /// The last search failed; state preserved for retry.
    Error,
}

/// Snapshot of the session at request-dispatch time.
///
/// Every fetch completion carries its ticket back; the reducer only
/// accepts a completion whose ticket equals the current `in_flight` value,
/// so a response outlived by a newer search is discarded wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub query: String,
    pub page: u32,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Failure,
}

/// Transient user-facing message (the notification surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

/// Complete state of one search session.
///
/// Mutated only by [`crate::session::SessionReducer`]; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Trimmed query of the current session; empty before the first search.
    pub query: String,
    /// 1-based page index of the most recent request.
    pub page: u32,
    /// Hits requested per page; fixed for the lifetime of the session.
    pub per_page: u32,
    /// Bumped on every accepted new-search submission. Part of the ticket,
    /// so completions from a superseded search can never match.
    pub generation: u64,
    /// Server-reported count of all matches for the current query.
    pub total_hits: u64,
    /// Count of hits shown so far across all loaded pages.
    pub cumulative_hits: u64,
    /// Every hit loaded so far, in arrival order.
    pub hits: Vec<Hit>,
    /// The one outstanding request, if any. `loading` in UI terms.
    pub in_flight: Option<RequestTicket>,
    /// No further pages exist for the current query.
    pub exhausted: bool,
    pub notice: Option<Notice>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(40)
    }
}

impl UiState for SessionState {}

impl SessionState {
    pub fn new(per_page: u32) -> Self {
        Self {
            phase: SessionPhase::Idle,
            query: String::new(),
            page: 1,
            per_page,
            generation: 0,
            total_hits: 0,
            cumulative_hits: 0,
            hits: Vec::new(),
            in_flight: None,
            exhausted: false,
            notice: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a load-more trigger (control, keybinding, or scroll
    /// proximity) may issue a request right now.
    pub fn can_load_more(&self) -> bool {
        matches!(self.phase, SessionPhase::Results)
            && !self.exhausted
            && self.in_flight.is_none()
            && self.cumulative_hits < self.total_hits
    }

    /// Visibility of the load-more control.
    pub fn show_load_more(&self) -> bool {
        matches!(self.phase, SessionPhase::Results)
            && !self.exhausted
            && self.cumulative_hits < self.total_hits
    }

    /// Visibility of the end-of-collection marker.
    pub fn show_end_marker(&self) -> bool {
        self.exhausted
    }

    /// Pages the server can serve for the current query.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total_hits.div_ceil(self.per_page as u64)
    }
}
