//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, redirects, form
//! state) and delegates rendering details to `components`.

pub mod job;
pub mod job_listing;
pub mod landing;
pub mod my_jobs;
pub mod onboarding;
pub mod post_job;
pub mod saved_jobs;
