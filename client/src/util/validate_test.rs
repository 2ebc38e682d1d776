use super::*;

fn valid_apply() -> ApplyForm {
    ApplyForm {
        experience: "4".to_owned(),
        skills: " rust, postgres ".to_owned(),
        education: "Graduate".to_owned(),
        resume_name: Some("cv.PDF".to_owned()),
    }
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(has_allowed_extension("Resume.DocX", &RESUME_EXTENSIONS));
    assert!(has_allowed_extension("logo.jpeg", &LOGO_EXTENSIONS));
    assert!(!has_allowed_extension("resume.txt", &RESUME_EXTENSIONS));
    assert!(!has_allowed_extension("pdf", &RESUME_EXTENSIONS));
}

#[test]
fn apply_form_valid_builds_submission() {
    let submission = valid_apply().validate().unwrap();
    assert_eq!(submission.experience, 4);
    assert_eq!(submission.skills, "rust, postgres");
    assert_eq!(submission.education, "Graduate");
}

#[test]
fn apply_form_zero_experience_is_allowed() {
    let form = ApplyForm { experience: "0".to_owned(), ..valid_apply() };
    assert_eq!(form.validate().unwrap().experience, 0);
}

#[test]
fn apply_form_rejects_negative_or_fractional_experience() {
    for raw in ["-1", "2.5", "abc"] {
        let form = ApplyForm { experience: raw.to_owned(), ..valid_apply() };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("experience").is_some(), "expected error for {raw:?}");
    }
}

#[test]
fn apply_form_empty_reports_every_field() {
    let errors = ApplyForm::default().validate().unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("experience"), Some("Experience is required"));
    assert_eq!(errors.get("skills"), Some("Skills are required"));
    assert_eq!(errors.get("education"), Some("Education is required"));
    assert_eq!(errors.get("resume"), Some("Resume is required"));
}

#[test]
fn apply_form_rejects_unknown_education_and_bad_resume() {
    let form = ApplyForm {
        education: "PhD".to_owned(),
        resume_name: Some("cv.png".to_owned()),
        ..valid_apply()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("education"), Some("Education is required"));
    assert_eq!(errors.get("resume"), Some("Only PDF or Word documents are allowed"));
    assert!(errors.get("skills").is_none());
}

#[test]
fn post_job_form_trims_and_builds_payload() {
    let form = PostJobForm {
        title: "  Backend Engineer ".to_owned(),
        description: "Own the API.".to_owned(),
        location: "Kerala".to_owned(),
        company_id: "c1".to_owned(),
        requirements: "- Rust\n".to_owned(),
    };
    let job = form.validate().unwrap();
    assert_eq!(job.title, "Backend Engineer");
    assert_eq!(job.requirements, "- Rust");
    assert_eq!(job.company_id, "c1");
}

#[test]
fn post_job_form_requires_company_and_location() {
    let form = PostJobForm {
        title: "t".to_owned(),
        description: "d".to_owned(),
        requirements: "r".to_owned(),
        ..PostJobForm::default()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("location"), Some("Select a location"));
    assert_eq!(errors.get("company_id"), Some("Select or add a new company"));
}

#[test]
fn company_form_requires_name_and_image_logo() {
    let errors = CompanyForm { name: " ".to_owned(), logo_name: Some("logo.gif".to_owned()) }
        .validate()
        .unwrap_err();
    assert_eq!(errors.get("name"), Some("Company name is required"));
    assert_eq!(errors.get("logo"), Some("Only PNG or JPEG images are allowed"));

    let name = CompanyForm { name: " Acme ".to_owned(), logo_name: Some("acme.png".to_owned()) }
        .validate()
        .unwrap();
    assert_eq!(name, "Acme");
}
