//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component code to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod markdown;
pub mod theme;
pub mod validate;
