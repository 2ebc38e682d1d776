use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), name: "Ada".to_owned(), email: None, avatar_url: None, role: Some(Role::Candidate) }
}

fn job_json() -> serde_json::Value {
    serde_json::json!({
        "id": "j1",
        "recruiter_id": "r1",
        "company": { "id": "c1", "name": "Acme", "logo_url": "/uploads/company-logos/acme.png" },
        "title": "Rust Engineer",
        "description": "Build things. Ship them.",
        "location": "Karnataka",
        "requirements": "- Rust\n- SQL",
        "is_open": true,
        "created_at": "2026-01-02T03:04:05Z",
        "applications": [{
            "id": "a1",
            "job_id": "j1",
            "candidate_id": "u1",
            "name": "Ada",
            "experience": 3,
            "skills": "rust, sql",
            "education": "Graduate",
            "resume": "/uploads/resumes/a.pdf",
            "status": "interviewing",
            "created_at": "2026-01-03T00:00:00Z"
        }]
    })
}

#[test]
fn role_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(Role::Recruiter).unwrap(), serde_json::json!("recruiter"));
    let parsed: Role = serde_json::from_value(serde_json::json!("candidate")).unwrap();
    assert_eq!(parsed, Role::Candidate);
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Candidate.home_path(), "/jobs");
    assert_eq!(Role::Recruiter.home_path(), "/post-job");
}

#[test]
fn user_without_role_deserializes() {
    let u: User = serde_json::from_value(serde_json::json!({
        "id": "u1", "name": "Ada", "email": null, "avatar_url": null, "role": null
    }))
    .unwrap();
    assert!(u.role.is_none());
}

#[test]
fn job_defaults_saved_and_applications() {
    let mut value = job_json();
    value.as_object_mut().unwrap().remove("applications");
    let job: Job = serde_json::from_value(value).unwrap();
    assert!(!job.saved);
    assert_eq!(job.application_count, 0);
    assert!(job.applications.is_empty());
}

#[test]
fn job_ownership_matches_recruiter_id() {
    let job: Job = serde_json::from_value(job_json()).unwrap();
    assert!(job.is_owned_by(Some(&user("r1"))));
    assert!(!job.is_owned_by(Some(&user("u1"))));
    assert!(!job.is_owned_by(None));
}

#[test]
fn job_application_lookup_by_candidate() {
    let job: Job = serde_json::from_value(job_json()).unwrap();
    let found = job.application_of(Some(&user("u1"))).unwrap();
    assert_eq!(found.status, ApplicationStatus::Interviewing);
    assert!(job.application_of(Some(&user("u2"))).is_none());
    assert!(job.application_of(None).is_none());
}

#[test]
fn application_status_parse_and_labels() {
    assert_eq!(ApplicationStatus::parse("hired"), Some(ApplicationStatus::Hired));
    assert_eq!(ApplicationStatus::parse("Hired"), None);
    assert_eq!(ApplicationStatus::Rejected.label(), "Rejected");
    assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
}

#[test]
fn job_filters_blank_search_counts_as_empty() {
    let filters = JobFilters { search: "   ".to_owned(), ..JobFilters::default() };
    assert!(filters.is_empty());
    let filters = JobFilters { location: "Goa".to_owned(), ..JobFilters::default() };
    assert!(!filters.is_empty());
}
