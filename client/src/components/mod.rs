//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout shell, listing cards, and the drawers used by
//! pages, reading shared auth/UI state from Leptos context providers.

pub mod add_company;
pub mod application_card;
pub mod apply_job;
pub mod field_error;
pub mod job_card;
pub mod layout;
pub mod loader;
pub mod protected_route;
