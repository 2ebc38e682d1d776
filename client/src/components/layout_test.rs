use super::*;

#[test]
fn sign_in_query_must_be_exactly_true() {
    assert!(sign_in_requested(Some("true")));
    assert!(!sign_in_requested(Some("1")));
    assert!(!sign_in_requested(None));
}

#[test]
fn sign_in_href_keeps_current_path() {
    assert_eq!(sign_in_href("/jobs"), "/jobs?sign-in=true");
    assert_eq!(sign_in_href("/job/42"), "/job/42?sign-in=true");
    assert_eq!(sign_in_href(""), "/?sign-in=true");
}
