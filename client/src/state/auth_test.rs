use super::*;

fn user_with(role: Option<Role>) -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None, avatar_url: None, role }
}

#[test]
fn default_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.role(), None);
}

#[test]
fn pending_is_loading() {
    assert!(AuthState::pending().loading);
}

#[test]
fn recruiter_detection() {
    let state = AuthState { user: Some(user_with(Some(Role::Recruiter))), loading: false };
    assert!(state.is_recruiter());
    assert_eq!(state.user_id(), Some("u1"));

    let state = AuthState { user: Some(user_with(Some(Role::Candidate))), loading: false };
    assert!(!state.is_recruiter());
}

#[test]
fn signed_in_without_role() {
    let state = AuthState { user: Some(user_with(None)), loading: false };
    assert!(state.is_signed_in());
    assert_eq!(state.role(), None);
    assert!(!state.is_recruiter());
}
