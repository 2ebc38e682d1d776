use super::*;

#[test]
fn duplicate_and_closed_are_conflicts() {
    assert_eq!(application_error_to_status(ApplicationError::AlreadyApplied(Uuid::nil())), StatusCode::CONFLICT);
    assert_eq!(application_error_to_status(ApplicationError::HiringClosed(Uuid::nil())), StatusCode::CONFLICT);
}

#[test]
fn missing_records_are_not_found() {
    assert_eq!(application_error_to_status(ApplicationError::JobNotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(application_error_to_status(ApplicationError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
}

#[test]
fn other_errors_map_to_statuses() {
    assert_eq!(application_error_to_status(ApplicationError::Forbidden), StatusCode::FORBIDDEN);
    assert_eq!(application_error_to_status(ApplicationError::InvalidInput("skills")), StatusCode::BAD_REQUEST);
    assert_eq!(
        application_error_to_status(ApplicationError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn status_body_rejects_unknown_status() {
    assert!(serde_json::from_str::<StatusBody>(r#"{"status":"ghosted"}"#).is_err());
    let body: StatusBody = serde_json::from_str(r#"{"status":"hired"}"#).unwrap();
    assert_eq!(body.status, ApplicationStatus::Hired);
}
