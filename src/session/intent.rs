use crate::api::SearchResponse;
use crate::session::state::RequestTicket;
use crate::ui::mvi::Intent;

/// Result of one fetch, stripped of error detail: the session only needs
/// to know whether the page arrived. Error specifics are logged where the
/// request runs.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(SearchResponse),
    Failed,
}

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Form submission. An empty trimmed query is rejected here and never
    /// reaches the network layer.
    Submit { query: String },
    /// Load-more trigger: control activation, keybinding, or scroll
    /// proximity. Ignored while a request is in flight or after the
    /// collection is exhausted.
    LoadMore,
    /// A fetch finished. Discarded unless `ticket` matches the current
    /// in-flight request.
    Completed {
        ticket: RequestTicket,
        outcome: FetchOutcome,
    },
    /// Notice TTL expired.
    DismissNotice,
}

impl Intent for SessionIntent {}
