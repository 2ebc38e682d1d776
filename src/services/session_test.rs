use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_differs_between_calls() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

fn user(role: Option<Role>) -> SessionUser {
    SessionUser { id: Uuid::nil(), name: "Asha".to_owned(), email: None, avatar_url: None, role }
}

#[test]
fn has_role_matches_only_assigned_role() {
    assert!(user(Some(Role::Recruiter)).has_role(Role::Recruiter));
    assert!(!user(Some(Role::Candidate)).has_role(Role::Recruiter));
    assert!(!user(None).has_role(Role::Candidate));
}

#[test]
fn session_user_serializes_role_lowercase_or_null() {
    let json = serde_json::to_value(user(Some(Role::Candidate))).unwrap();
    assert_eq!(json["role"], "candidate");
    let json = serde_json::to_value(user(None)).unwrap();
    assert!(json["role"].is_null());
}
