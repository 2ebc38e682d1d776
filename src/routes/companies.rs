//! Company routes.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::routes::auth::AuthUser;
use crate::routes::form::read_multipart;
use crate::routes::upload_error_to_status;
use crate::services::company::{self, CompanyError, CompanyRow};
use crate::services::identity::Role;
use crate::services::storage::{self, Bucket, UploadError};
use crate::state::AppState;

pub(crate) fn company_error_to_status(err: CompanyError) -> StatusCode {
    match err {
        CompanyError::InvalidName => StatusCode::BAD_REQUEST,
        CompanyError::Duplicate(_) => StatusCode::CONFLICT,
        CompanyError::Database(e) => {
            tracing::error!(error = %e, "company query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/companies` — all companies by name.
pub async fn list_companies(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<CompanyRow>>, StatusCode> {
    let rows = company::list_companies(&state.pool).await.map_err(company_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/companies` — multipart `name` + `logo`.
///
/// The name and logo type are checked before the logo is written; a failed
/// insert removes the stored logo.
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CompanyRow>), StatusCode> {
    auth.require_role(Role::Recruiter)?;
    let form = read_multipart(multipart, "logo").await?;
    let name = company::normalize_name(form.text("name")).map_err(company_error_to_status)?;
    let logo = form.file.ok_or_else(|| upload_error_to_status(&UploadError::MissingFile("logo")))?;
    storage::check_extension(Bucket::CompanyLogos, &logo.file_name).map_err(|e| upload_error_to_status(&e))?;
    company::ensure_name_available(&state.pool, &name)
        .await
        .map_err(company_error_to_status)?;

    let logo_url = storage::save(&state.config.upload_dir, Bucket::CompanyLogos, &logo.file_name, &logo.bytes)
        .await
        .map_err(|e| upload_error_to_status(&e))?;

    let created = company::create_company(&state.pool, &name, &logo_url).await;
    let row = storage::discard_on_err(&state.config.upload_dir, &logo_url, created)
        .await
        .map_err(company_error_to_status)?;
    tracing::info!(company_id = %row.id, name = %row.name, "company created");
    Ok((StatusCode::CREATED, Json(row)))
}
