//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and role-aware components to coordinate sign-in
//! redirects, onboarding, and recruiter/candidate rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// Provided as `RwSignal<AuthState>` context by `App`. `loading` stays true
/// until the first `/api/auth/me` probe resolves.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the session probe completes.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    #[must_use]
    pub fn is_recruiter(&self) -> bool {
        self.role() == Some(Role::Recruiter)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}
