//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow: intents (user actions, fetch
//! completions) go through a pure reducer, the reducer produces the next
//! state, the view renders the state. The session controller is the main
//! reducer in this app; side effects it calls for (network dispatch) are
//! performed by the runtime after the fact.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
