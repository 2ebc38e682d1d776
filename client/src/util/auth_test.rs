use super::*;
use crate::net::types::User;

fn signed_in(role: Option<Role>) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: Some("ada@example.com".to_owned()),
            avatar_url: None,
            role,
        }),
        loading: false,
    }
}

#[test]
fn guard_waits_while_session_loads() {
    assert_eq!(guard_outcome(&AuthState::pending(), "/jobs"), GuardOutcome::Wait);
}

#[test]
fn guard_sends_signed_out_visitors_to_sign_in() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(guard_outcome(&state, "/jobs"), GuardOutcome::Redirect("/?sign-in=true"));
    assert_eq!(guard_outcome(&state, "/onboarding"), GuardOutcome::Redirect("/?sign-in=true"));
}

#[test]
fn guard_sends_roleless_users_to_onboarding() {
    let state = signed_in(None);
    assert_eq!(guard_outcome(&state, "/jobs"), GuardOutcome::Redirect("/onboarding"));
    assert_eq!(guard_outcome(&state, "/job/42"), GuardOutcome::Redirect("/onboarding"));
}

#[test]
fn guard_allows_onboarding_without_role() {
    assert_eq!(guard_outcome(&signed_in(None), "/onboarding"), GuardOutcome::Allow);
}

#[test]
fn guard_allows_users_with_role() {
    assert_eq!(guard_outcome(&signed_in(Some(Role::Candidate)), "/saved-jobs"), GuardOutcome::Allow);
    assert_eq!(guard_outcome(&signed_in(Some(Role::Recruiter)), "/post-job"), GuardOutcome::Allow);
}

#[test]
fn role_redirect_moves_candidates_off_recruiter_pages() {
    assert_eq!(role_redirect(&signed_in(Some(Role::Candidate)), Role::Recruiter), Some("/jobs"));
}

#[test]
fn role_redirect_keeps_matching_role() {
    assert_eq!(role_redirect(&signed_in(Some(Role::Recruiter)), Role::Recruiter), None);
}

#[test]
fn role_redirect_ignores_loading_and_roleless() {
    assert_eq!(role_redirect(&AuthState::pending(), Role::Recruiter), None);
    assert_eq!(role_redirect(&signed_in(None), Role::Recruiter), None);
}
