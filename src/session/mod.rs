//! Search session state machine.
//!
//! All pagination and lifecycle logic lives here as a pure reducer over
//! [`SessionState`]: new-search and load-more workflows, request tickets,
//! end-of-results detection, and user notices. The reducer never performs
//! I/O; the UI runtime watches the state it produces and dispatches the
//! network calls it asks for.

mod intent;
mod reducer;
mod state;

pub use intent::{FetchOutcome, SessionIntent};
pub use reducer::SessionReducer;
pub use state::{
    found_notice, Notice, NoticeKind, RequestTicket, SessionPhase, SessionState,
    NOTICE_EMPTY_QUERY, NOTICE_END_OF_RESULTS, NOTICE_NO_RESULTS, NOTICE_SEARCH_FAILED,
};
