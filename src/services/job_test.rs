use super::*;

fn sql_for(scope: &JobScope) -> String {
    let mut qb = QueryBuilder::<Postgres>::new("");
    push_job_query(&mut qb, Uuid::nil(), scope);
    qb.sql().to_owned()
}

// =============================================================================
// escape_like
// =============================================================================

#[test]
fn escape_like_passes_plain_text() {
    assert_eq!(escape_like("rust developer"), "rust developer");
}

#[test]
fn escape_like_escapes_wildcards_and_backslash() {
    assert_eq!(escape_like("100%_sure\\"), "100\\%\\_sure\\\\");
}

// =============================================================================
// push_job_query
// =============================================================================

#[test]
fn unfiltered_list_has_no_extra_conditions() {
    let sql = sql_for(&JobScope::All(JobFilter::default()));
    assert!(sql.contains("AS saved FROM jobs j JOIN companies c ON c.id = j.company_id WHERE TRUE ORDER BY"));
    assert!(sql.ends_with("ORDER BY j.created_at DESC"));
    assert!(sql.contains("s.user_id = $1"));
}

#[test]
fn filters_bind_in_order() {
    let filter = JobFilter {
        location: Some("Goa".to_owned()),
        company_id: Some(Uuid::nil()),
        search: Some(" rust ".to_owned()),
    };
    let sql = sql_for(&JobScope::All(filter));
    assert!(sql.contains(" AND j.location = $2"));
    assert!(sql.contains(" AND j.company_id = $3"));
    assert!(sql.contains(" AND j.title ILIKE $4"));
}

#[test]
fn blank_filters_are_ignored() {
    let filter = JobFilter { location: Some(String::new()), company_id: None, search: Some("   ".to_owned()) };
    let sql = sql_for(&JobScope::All(filter));
    assert!(!sql.contains("j.location ="));
    assert!(!sql.contains("ILIKE"));
}

#[test]
fn saved_scope_requires_bookmark() {
    let sql = sql_for(&JobScope::SavedBy(Uuid::nil()));
    assert!(sql.contains("s2.user_id = $2)"));
}

#[test]
fn posted_and_single_scopes_filter_by_id() {
    assert!(sql_for(&JobScope::PostedBy(Uuid::nil())).contains(" AND j.recruiter_id = $2"));
    assert!(sql_for(&JobScope::One(Uuid::nil())).contains(" AND j.id = $2"));
}

// =============================================================================
// NewJob / ownership
// =============================================================================

fn new_job() -> NewJob {
    NewJob {
        title: " Backend Engineer ".to_owned(),
        description: "Build APIs.".to_owned(),
        location: "Karnataka".to_owned(),
        company_id: Uuid::nil(),
        requirements: "- Rust".to_owned(),
    }
}

#[test]
fn normalized_trims_fields() {
    let job = new_job().normalized().unwrap();
    assert_eq!(job.title, "Backend Engineer");
}

#[test]
fn normalized_reports_first_blank_field() {
    let job = NewJob { description: " ".to_owned(), requirements: String::new(), ..new_job() };
    assert!(matches!(job.normalized(), Err(JobError::InvalidInput("description"))));
}

#[test]
fn new_job_deserializes_from_client_body() {
    let job: NewJob = serde_json::from_value(serde_json::json!({
        "title": "t",
        "description": "d",
        "location": "Goa",
        "company_id": "00000000-0000-0000-0000-000000000000",
        "requirements": "r",
    }))
    .unwrap();
    assert_eq!(job.company_id, Uuid::nil());
}

#[test]
fn check_owner_allows_only_owner() {
    let owner = Uuid::new_v4();
    assert!(check_owner(owner, owner).is_ok());
    assert!(matches!(check_owner(owner, Uuid::new_v4()), Err(JobError::Forbidden)));
}

#[test]
fn job_row_serializes_client_shape() {
    let row = JobRow {
        id: Uuid::nil(),
        recruiter_id: Uuid::nil(),
        company: CompanyRow { id: Uuid::nil(), name: "Acme".to_owned(), logo_url: "/l.png".to_owned() },
        title: "Engineer".to_owned(),
        description: "d".to_owned(),
        location: "Goa".to_owned(),
        requirements: "r".to_owned(),
        is_open: true,
        created_at: OffsetDateTime::UNIX_EPOCH,
        saved: false,
        application_count: 3,
        applications: Vec::new(),
    };
    let json = serde_json::to_value(row).unwrap();
    assert_eq!(json["company"]["name"], "Acme");
    assert_eq!(json["is_open"], true);
    assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    assert_eq!(json["application_count"], 3);
    assert_eq!(json["applications"], serde_json::json!([]));
}
