use super::*;

// =============================================================================
// parse_fields
// =============================================================================

#[test]
fn parse_fields_accepts_valid_submission() {
    let fields = parse_fields(" 3 ", " rust, sql ", "Graduate").unwrap();
    assert_eq!(
        fields,
        ApplicationFields { experience: 3, skills: "rust, sql".to_owned(), education: "Graduate".to_owned() }
    );
}

#[test]
fn parse_fields_allows_zero_experience() {
    assert_eq!(parse_fields("0", "go", "Intermediate").unwrap().experience, 0);
}

#[test]
fn parse_fields_rejects_negative_or_fractional_experience() {
    for raw in ["-1", "2.5", "", "many"] {
        assert!(
            matches!(parse_fields(raw, "go", "Graduate"), Err(ApplicationError::InvalidInput("experience"))),
            "{raw:?}"
        );
    }
}

#[test]
fn parse_fields_requires_skills() {
    assert!(matches!(parse_fields("1", "  ", "Graduate"), Err(ApplicationError::InvalidInput("skills"))));
}

#[test]
fn parse_fields_requires_known_education() {
    assert!(matches!(parse_fields("1", "go", "PhD"), Err(ApplicationError::InvalidInput("education"))));
    assert!(parse_fields("1", "go", "Post Graduate").is_ok());
}

// =============================================================================
// ApplicationStatus
// =============================================================================

#[test]
fn status_round_trips_wire_names() {
    for status in [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ] {
        assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    assert_eq!(ApplicationStatus::parse("Hired"), None);
}

#[test]
fn status_body_deserializes() {
    let status: ApplicationStatus = serde_json::from_str(r#""interviewing""#).unwrap();
    assert_eq!(status, ApplicationStatus::Interviewing);
}

// =============================================================================
// ApplicationRow
// =============================================================================

#[test]
fn application_row_serializes_rfc3339_and_omits_missing_job() {
    let row = ApplicationRow {
        id: Uuid::nil(),
        job_id: Uuid::nil(),
        candidate_id: Uuid::nil(),
        name: "Asha".to_owned(),
        experience: 2,
        skills: "rust".to_owned(),
        education: "Graduate".to_owned(),
        resume: "/uploads/resumes/x-cv.pdf".to_owned(),
        status: ApplicationStatus::Applied,
        created_at: OffsetDateTime::UNIX_EPOCH,
        job: None,
    };
    let json = serde_json::to_value(row).unwrap();
    assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    assert_eq!(json["status"], "applied");
    assert!(json.get("job").is_none());
}
