//! Terminal presentation layer.
//!
//! `App` owns the reducer-managed state and the resolved current screen;
//! `render` draws it, `input` maps keys to app actions and `runtime` runs
//! the event loop.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigator;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod selection;
pub mod terminal_guard;
pub mod theme;
