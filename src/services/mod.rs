//! Service layer: database access and domain rules.
//!
//! Routes stay thin; every SQL statement lives here and failures surface as
//! per-service `thiserror` enums.

pub mod application;
pub mod company;
pub mod identity;
pub mod job;
pub mod session;
pub mod storage;
