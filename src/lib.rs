//! pixelrover: a terminal image-search gallery for the Pixabay API.
//!
//! Type a query, browse a paginated thumbnail gallery, open a lightbox
//! view of any hit, and load further pages until the collection is
//! exhausted. The session lifecycle (new search, load more, end-of-results
//! detection, stale-response discarding) is a pure reducer in
//! [`session`]; [`api`] speaks the wire, [`gallery`] maps hits to display
//! cards, and [`ui`] hosts the event loop.

pub mod api;
pub mod config;
pub mod gallery;
pub mod logging;
pub mod session;
pub mod ui;
