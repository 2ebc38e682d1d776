//! Application routes: submit, list own, recruiter status updates.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::form::read_multipart;
use crate::routes::upload_error_to_status;
use crate::services::application::{self, ApplicationError, ApplicationRow, ApplicationStatus};
use crate::services::identity::Role;
use crate::services::storage::{self, Bucket, UploadError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StatusBody {
    pub status: ApplicationStatus,
}

pub(crate) fn application_error_to_status(err: ApplicationError) -> StatusCode {
    match err {
        ApplicationError::JobNotFound(_) | ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Forbidden => StatusCode::FORBIDDEN,
        ApplicationError::AlreadyApplied(_) | ApplicationError::HiringClosed(_) => StatusCode::CONFLICT,
        ApplicationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Database(e) => {
            tracing::error!(error = %e, "application query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `POST /api/jobs/:id/applications` — multipart `experience`, `skills`,
/// `education`, `resume`.
///
/// The job is checked before the resume is written, and a failed insert
/// removes the stored resume.
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApplicationRow>), StatusCode> {
    auth.require_role(Role::Candidate)?;
    let form = read_multipart(multipart, "resume").await?;
    let fields = application::parse_fields(form.text("experience"), form.text("skills"), form.text("education"))
        .map_err(application_error_to_status)?;
    let resume = form.file.ok_or_else(|| upload_error_to_status(&UploadError::MissingFile("resume")))?;
    storage::check_extension(Bucket::Resumes, &resume.file_name).map_err(|e| upload_error_to_status(&e))?;

    application::ensure_accepting(&state.pool, job_id, auth.user.id)
        .await
        .map_err(application_error_to_status)?;

    let resume_url = storage::save(&state.config.upload_dir, Bucket::Resumes, &resume.file_name, &resume.bytes)
        .await
        .map_err(|e| upload_error_to_status(&e))?;

    let created =
        application::create_application(&state.pool, job_id, auth.user.id, &auth.user.name, &fields, &resume_url).await;
    let row = storage::discard_on_err(&state.config.upload_dir, &resume_url, created)
        .await
        .map_err(application_error_to_status)?;
    tracing::info!(application_id = %row.id, %job_id, "application submitted");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/applications` — the candidate's own applications.
pub async fn list_mine(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<ApplicationRow>>, StatusCode> {
    auth.require_role(Role::Candidate)?;
    let rows = application::list_for_candidate(&state.pool, auth.user.id)
        .await
        .map_err(application_error_to_status)?;
    Ok(Json(rows))
}

/// `PATCH /api/applications/:id/status` — recruiter owning the job.
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
    Json(body): Json<StatusBody>,
) -> Result<StatusCode, StatusCode> {
    auth.require_role(Role::Recruiter)?;
    application::update_status(&state.pool, auth.user.id, application_id, body.status)
        .await
        .map_err(application_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "applications_test.rs"]
mod tests;
