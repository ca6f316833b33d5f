//! Terminal interface: event loop, input handling, and drawing.

pub mod app;
pub mod events;
pub mod footer;
pub mod gallery_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod lightbox;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
