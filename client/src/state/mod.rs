//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `ui` are provided as `RwSignal` contexts by `App`; `fetch` is
//! instantiated per page for each remote call it makes.

pub mod auth;
pub mod fetch;
pub mod ui;
