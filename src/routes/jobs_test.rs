use super::*;

#[test]
fn empty_query_is_unfiltered() {
    let filter = JobListQuery::default().into_filter().unwrap();
    assert_eq!(filter, JobFilter::default());
}

#[test]
fn blank_company_id_is_ignored() {
    let query = JobListQuery { company_id: Some("  ".to_owned()), ..JobListQuery::default() };
    assert_eq!(query.into_filter().unwrap().company_id, None);
}

#[test]
fn company_id_must_be_uuid() {
    let query = JobListQuery { company_id: Some("acme".to_owned()), ..JobListQuery::default() };
    assert_eq!(query.into_filter().unwrap_err(), StatusCode::BAD_REQUEST);
}

#[test]
fn query_values_pass_through() {
    let id = Uuid::new_v4();
    let query = JobListQuery {
        location: Some("Kerala".to_owned()),
        company_id: Some(id.to_string()),
        search: Some("rust".to_owned()),
    };
    let filter = query.into_filter().unwrap();
    assert_eq!(filter.location.as_deref(), Some("Kerala"));
    assert_eq!(filter.company_id, Some(id));
    assert_eq!(filter.search.as_deref(), Some("rust"));
}

#[test]
fn job_errors_map_to_statuses() {
    assert_eq!(job_error_to_status(JobError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(job_error_to_status(JobError::Forbidden), StatusCode::FORBIDDEN);
    assert_eq!(job_error_to_status(JobError::InvalidInput("title")), StatusCode::BAD_REQUEST);
    assert_eq!(job_error_to_status(JobError::UnknownCompany(Uuid::nil())), StatusCode::BAD_REQUEST);
    assert_eq!(job_error_to_status(JobError::Database(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        job_error_to_status(JobError::Application(ApplicationError::Database(sqlx::Error::RowNotFound))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn hiring_status_body_reads_flag() {
    let body: HiringStatusBody = serde_json::from_str(r#"{"is_open":false}"#).unwrap();
    assert!(!body.is_open);
}

#[test]
fn save_toggle_response_shape() {
    assert_eq!(serde_json::to_value(SaveToggleResponse { saved: true }).unwrap(), serde_json::json!({ "saved": true }));
}
