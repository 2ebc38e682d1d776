//! Job routes: listing, detail, posting, hiring status, bookmarks.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::application::ApplicationError;
use crate::services::identity::Role;
use crate::services::job::{self, JobError, JobFilter, JobRow, JobScope, NewJob};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    pub location: Option<String>,
    pub company_id: Option<String>,
    pub search: Option<String>,
}

impl JobListQuery {
    /// Convert raw query values. A non-empty `company_id` must be a UUID.
    pub(crate) fn into_filter(self) -> Result<JobFilter, StatusCode> {
        let company_id = match self.company_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(Uuid::parse_str(raw).map_err(|_| StatusCode::BAD_REQUEST)?),
            None => None,
        };
        Ok(JobFilter { location: self.location, company_id, search: self.search })
    }
}

#[derive(Deserialize)]
pub struct HiringStatusBody {
    pub is_open: bool,
}

#[derive(Serialize)]
pub struct SaveToggleResponse {
    pub saved: bool,
}

pub(crate) fn job_error_to_status(err: JobError) -> StatusCode {
    match err {
        JobError::NotFound(_) => StatusCode::NOT_FOUND,
        JobError::UnknownCompany(_) | JobError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        JobError::Forbidden => StatusCode::FORBIDDEN,
        JobError::Application(ApplicationError::Database(e)) | JobError::Database(e) => {
            tracing::error!(error = %e, "job query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        JobError::Application(e) => crate::routes::applications::application_error_to_status(e),
    }
}

/// `GET /api/jobs` — filtered list, newest first.
pub async fn list_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<JobListQuery>,
) -> Result<Json<Vec<JobRow>>, StatusCode> {
    let scope = JobScope::All(query.into_filter()?);
    let rows = job::list_jobs(&state.pool, auth.user.id, &scope)
        .await
        .map_err(job_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/jobs` — publish a job.
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewJob>,
) -> Result<(StatusCode, Json<JobRow>), StatusCode> {
    auth.require_role(Role::Recruiter)?;
    let row = job::create_job(&state.pool, auth.user.id, body)
        .await
        .map_err(job_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/jobs/:id` — job with company and applications.
pub async fn get_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobRow>, StatusCode> {
    let row = job::get_job(&state.pool, auth.user.id, job_id)
        .await
        .map_err(job_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/jobs/:id` — owner only.
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    job::delete_job(&state.pool, auth.user.id, job_id)
        .await
        .map_err(job_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/jobs/:id/hiring-status` — owner only.
pub async fn update_hiring_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
    Json(body): Json<HiringStatusBody>,
) -> Result<StatusCode, StatusCode> {
    job::set_hiring_status(&state.pool, auth.user.id, job_id, body.is_open)
        .await
        .map_err(job_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/jobs/:id/save` — toggle the viewer's bookmark.
pub async fn toggle_saved(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<SaveToggleResponse>, StatusCode> {
    let saved = job::toggle_saved(&state.pool, auth.user.id, job_id)
        .await
        .map_err(job_error_to_status)?;
    Ok(Json(SaveToggleResponse { saved }))
}

/// `GET /api/saved-jobs` — the viewer's bookmarks.
pub async fn list_saved_jobs(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<JobRow>>, StatusCode> {
    let scope = JobScope::SavedBy(auth.user.id);
    let rows = job::list_jobs(&state.pool, auth.user.id, &scope)
        .await
        .map_err(job_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/my-jobs` — jobs the recruiter posted.
pub async fn list_my_jobs(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<JobRow>>, StatusCode> {
    auth.require_role(Role::Recruiter)?;
    let scope = JobScope::PostedBy(auth.user.id);
    let rows = job::list_jobs(&state.pool, auth.user.id, &scope)
        .await
        .map_err(job_error_to_status)?;
    Ok(Json(rows))
}

#[cfg(test)]
#[path = "jobs_test.rs"]
mod tests;
