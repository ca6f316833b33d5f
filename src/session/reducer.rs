use crate::session::intent::{FetchOutcome, SessionIntent};
use crate::session::state::{
    found_notice, Notice, RequestTicket, SessionPhase, SessionState, NOTICE_EMPTY_QUERY,
    NOTICE_END_OF_RESULTS, NOTICE_NO_RESULTS, NOTICE_SEARCH_FAILED,
};
use crate::ui::mvi::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Submit { query } => submit(state, query),
            SessionIntent::LoadMore => load_more(state),
            SessionIntent::Completed { ticket, outcome } => completed(state, ticket, outcome),
            SessionIntent::DismissNotice => SessionState {
                notice: None,
                ..state
            },
        }
    }
}

/// New search.
///
/// An empty trimmed query is rejected without touching anything but the
/// notice; the gallery the user may still be looking at survives. A valid
/// query resets the session to page 1 under a fresh generation.
fn submit(state: SessionState, query: String) -> SessionState {
    let query = query.trim().to_string();
    if query.is_empty() {
        return SessionState {
            notice: Some(Notice::failure(NOTICE_EMPTY_QUERY)),
            ..state
        };
    }

    let generation = state.generation + 1;
    let ticket = RequestTicket {
        query: query.clone(),
        page: 1,
        generation,
    };

    SessionState {
        phase: SessionPhase::Searching,
        query,
        page: 1,
        generation,
        total_hits: 0,
        cumulative_hits: 0,
        hits: Vec::new(),
        in_flight: Some(ticket),
        exhausted: false,
        notice: None,
        ..state
    }
}

/// Load more: increment the page and record the ticket, or no-op when
/// loading, exhausted, or there is nothing left to fetch.
fn load_more(state: SessionState) -> SessionState {
    if !state.can_load_more() {
        return state;
    }

    let page = state.page + 1;
    let ticket = RequestTicket {
        query: state.query.clone(),
        page,
        generation: state.generation,
    };

    SessionState {
        page,
        in_flight: Some(ticket),
        ..state
    }
}

fn completed(state: SessionState, ticket: RequestTicket, outcome: FetchOutcome) -> SessionState {
    // Stale-response guard: only the one outstanding request may land.
    if state.in_flight.as_ref() != Some(&ticket) {
        return state;
    }

    let state = SessionState {
        in_flight: None,
        ..state
    };

    if ticket.page == 1 {
        first_page_completed(state, outcome)
    } else {
        next_page_completed(state, outcome)
    }
}

fn first_page_completed(state: SessionState, outcome: FetchOutcome) -> SessionState {
    let response = match outcome {
        FetchOutcome::Loaded(response) => response,
        // Query and page survive so the user can resubmit.
        FetchOutcome::Failed => {
            return SessionState {
                phase: SessionPhase::Error,
                notice: Some(Notice::failure(NOTICE_SEARCH_FAILED)),
                ..state
            };
        }
    };

    if response.total_hits == 0 {
        return SessionState {
            phase: SessionPhase::Empty,
            total_hits: 0,
            notice: Some(Notice::failure(NOTICE_NO_RESULTS)),
            ..state
        };
    }

    let cumulative_hits = response.hits.len() as u64;
    SessionState {
        phase: SessionPhase::Results,
        total_hits: response.total_hits,
        cumulative_hits,
        hits: response.hits,
        notice: Some(Notice::success(found_notice(response.total_hits))),
        ..state
    }
}

fn next_page_completed(state: SessionState, outcome: FetchOutcome) -> SessionState {
    let response = match outcome {
        FetchOutcome::Loaded(response) => response,
        // Roll the page back so a retry re-requests the same page.
        FetchOutcome::Failed => {
            return SessionState {
                page: state.page - 1,
                notice: Some(Notice::failure(NOTICE_SEARCH_FAILED)),
                ..state
            };
        }
    };

    let mut state = state;
    state.total_hits = response.total_hits;
    state.cumulative_hits += response.hits.len() as u64;
    state.hits.extend(response.hits);

    let exhausted = state.total_hits == 0
        || state.cumulative_hits >= state.total_hits
        || state.page as u64 >= state.total_pages();

    if exhausted {
        SessionState {
            exhausted: true,
            notice: Some(Notice::info(NOTICE_END_OF_RESULTS)),
            ..state
        }
    } else {
        SessionState {
            notice: Some(Notice::success(found_notice(state.total_hits))),
            ..state
        }
    }
}
