use super::*;

#[test]
fn jobs_endpoint_without_filters_has_no_query() {
    assert_eq!(jobs_endpoint(&JobFilters::default()), "/api/jobs");
}

#[test]
fn jobs_endpoint_encodes_all_filters() {
    let filters = JobFilters {
        search: "  rust & wasm ".to_owned(),
        location: "Tamil Nadu".to_owned(),
        company_id: "c-1".to_owned(),
    };
    assert_eq!(
        jobs_endpoint(&filters),
        "/api/jobs?search=rust%20%26%20wasm&location=Tamil%20Nadu&company_id=c-1"
    );
}

#[test]
fn jobs_endpoint_skips_blank_search() {
    let filters = JobFilters { search: "   ".to_owned(), location: "Goa".to_owned(), ..JobFilters::default() };
    assert_eq!(jobs_endpoint(&filters), "/api/jobs?location=Goa");
}

#[test]
fn job_scoped_endpoints_format_expected_paths() {
    assert_eq!(job_endpoint("j1"), "/api/jobs/j1");
    assert_eq!(hiring_status_endpoint("j1"), "/api/jobs/j1/hiring-status");
    assert_eq!(save_job_endpoint("j1"), "/api/jobs/j1/save");
    assert_eq!(apply_endpoint("j1"), "/api/jobs/j1/applications");
    assert_eq!(application_status_endpoint("a9"), "/api/applications/a9/status");
}

#[test]
fn request_failed_message_adds_hint_for_known_statuses() {
    assert_eq!(request_failed_message("application", 409), "application failed: 409 (conflict)");
    assert_eq!(request_failed_message("job fetch", 404), "job fetch failed: 404 (not found)");
    assert_eq!(request_failed_message("job list", 500), "job list failed: 500");
}

#[test]
fn hiring_status_body_shape() {
    assert_eq!(hiring_status_body(false), serde_json::json!({ "is_open": false }));
}

#[test]
fn application_status_body_uses_wire_name() {
    assert_eq!(
        application_status_body(ApplicationStatus::Interviewing),
        serde_json::json!({ "status": "interviewing" })
    );
}
