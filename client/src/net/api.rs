//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade to an inline message without crashing hydration. Upload helpers
//! take a browser `File` and exist only in hydrate builds.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApplicationStatus;
use super::types::{Application, Company, Job, JobFilters, NewJob, Role, User};
#[cfg(feature = "hydrate")]
use super::types::SaveToggle;

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB_ERROR: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn jobs_endpoint(filters: &JobFilters) -> String {
    let mut params = Vec::new();
    let search = filters.search.trim();
    if !search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if !filters.location.is_empty() {
        params.push(format!("location={}", urlencoding::encode(&filters.location)));
    }
    if !filters.company_id.is_empty() {
        params.push(format!("company_id={}", urlencoding::encode(&filters.company_id)));
    }
    if params.is_empty() { "/api/jobs".to_owned() } else { format!("/api/jobs?{}", params.join("&")) }
}

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job_id: &str) -> String {
    format!("/api/jobs/{}", urlencoding::encode(job_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn hiring_status_endpoint(job_id: &str) -> String {
    format!("{}/hiring-status", job_endpoint(job_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn save_job_endpoint(job_id: &str) -> String {
    format!("{}/save", job_endpoint(job_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn apply_endpoint(job_id: &str) -> String {
    format!("{}/applications", job_endpoint(job_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn application_status_endpoint(application_id: &str) -> String {
    format!("/api/applications/{}/status", urlencoding::encode(application_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    let hint = match status {
        401 => " (sign in required)",
        403 => " (not permitted)",
        404 => " (not found)",
        409 => " (conflict)",
        413 => " (file too large)",
        _ => "",
    };
    format!("{action} failed: {status}{hint}")
}

#[cfg(any(test, feature = "hydrate"))]
fn hiring_status_body(is_open: bool) -> serde_json::Value {
    serde_json::json!({ "is_open": is_open })
}

#[cfg(any(test, feature = "hydrate"))]
fn application_status_body(status: ApplicationStatus) -> serde_json::Value {
    serde_json::json!({ "status": status.as_str() })
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    action: &str,
) -> Result<T, String> {
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
fn expect_ok(resp: &gloo_net::http::Response, action: &str) -> Result<(), String> {
    if resp.ok() { Ok(()) } else { Err(request_failed_message(action, resp.status())) }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================================
// SESSION
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Record the onboarding role choice via `PUT /api/auth/role`.
///
/// # Errors
///
/// Returns an error string if the request fails or the role was already set.
pub async fn set_role(role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "role": role.as_str() });
        let resp = gloo_net::http::Request::put("/api/auth/role")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "role update").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

// =============================================================================
// COMPANIES
// =============================================================================

/// List companies from `GET /api/companies`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/companies")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "company list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Create a company with an uploaded logo via multipart `POST /api/companies`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built or the request fails.
#[cfg(feature = "hydrate")]
pub async fn create_company(name: &str, logo: &web_sys::File) -> Result<Company, String> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("name", name).map_err(js_error)?;
    form.append_with_blob_and_filename("logo", logo, &logo.name())
        .map_err(js_error)?;
    let resp = gloo_net::http::Request::post("/api/companies")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, "company create").await
}

// =============================================================================
// JOBS
// =============================================================================

/// List jobs matching `filters` from `GET /api/jobs`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_jobs(filters: JobFilters) -> Result<Vec<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&jobs_endpoint(&filters))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "job list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Fetch one job with its company and applications.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_job(job_id: String) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&job_endpoint(&job_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "job fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Open or close hiring on a job the current recruiter owns.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_hiring_status(job_id: String, is_open: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&hiring_status_endpoint(&job_id))
            .json(&hiring_status_body(is_open))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(&resp, "hiring status update")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, is_open);
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Post a new job via `POST /api/jobs`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_job(job: NewJob) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/jobs")
            .json(&job)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "job create").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Delete a job the current recruiter owns.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_job(job_id: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&job_endpoint(&job_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(&resp, "job delete")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Toggle the saved flag for a job. Returns the new state.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn toggle_saved_job(job_id: String) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&save_job_endpoint(&job_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body: SaveToggle = read_json(resp, "save job").await?;
        Ok(body.saved)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Jobs the current user saved.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_saved_jobs() -> Result<Vec<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/saved-jobs")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "saved jobs").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Jobs posted by the current recruiter.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_my_jobs() -> Result<Vec<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/my-jobs")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "my jobs").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// Fields of the application form, already validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub experience: u32,
    pub skills: String,
    pub education: String,
}

/// Apply to a job with a resume upload via multipart
/// `POST /api/jobs/:id/applications`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built or the request fails.
#[cfg(feature = "hydrate")]
pub async fn apply_to_job(
    job_id: &str,
    submission: &ApplicationSubmission,
    resume: &web_sys::File,
) -> Result<Application, String> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("experience", &submission.experience.to_string())
        .map_err(js_error)?;
    form.append_with_str("skills", &submission.skills)
        .map_err(js_error)?;
    form.append_with_str("education", &submission.education)
        .map_err(js_error)?;
    form.append_with_blob_and_filename("resume", resume, &resume.name())
        .map_err(js_error)?;
    let resp = gloo_net::http::Request::post(&apply_endpoint(job_id))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp, "application").await
}

/// The current candidate's applications.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_my_applications() -> Result<Vec<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/applications")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "application list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB_ERROR.to_owned())
    }
}

/// Move an application to a new status (recruiter only).
///
/// # Errors
///
/// Returns an error string if the request fails.
#[cfg(feature = "hydrate")]
pub async fn update_application_status(application_id: String, status: ApplicationStatus) -> Result<(), String> {
    let resp = gloo_net::http::Request::patch(&application_status_endpoint(&application_id))
        .json(&application_status_body(status))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(&resp, "status update")
}
