//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and role-restricted pages should apply identical redirect
//! behavior, so the decisions live here as pure functions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Where a signed-out visitor is sent; the header opens sign-in on this query.
pub const SIGN_IN_PATH: &str = "/?sign-in=true";
pub const ONBOARDING_PATH: &str = "/onboarding";

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session probe still in flight.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Decide whether `path` may render for `auth`.
#[must_use]
pub fn guard_outcome(auth: &AuthState, path: &str) -> GuardOutcome {
    if auth.loading {
        return GuardOutcome::Wait;
    }
    let Some(user) = auth.user.as_ref() else {
        return GuardOutcome::Redirect(SIGN_IN_PATH);
    };
    if user.role.is_none() && path != ONBOARDING_PATH {
        return GuardOutcome::Redirect(ONBOARDING_PATH);
    }
    GuardOutcome::Allow
}

/// Target for a page that only `required` may use, or `None` to stay.
///
/// Users without a role are left alone here; the route guard already
/// sends them to onboarding.
#[must_use]
pub fn role_redirect(auth: &AuthState, required: Role) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    match auth.role() {
        Some(role) if role != required => Some(role.home_path()),
        _ => None,
    }
}

/// Navigate away whenever the guard asks for a redirect.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, path: Signal<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(target) = guard_outcome(&auth.get(), &path.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
