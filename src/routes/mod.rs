//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, the OAuth endpoints, uploaded files, and
//! Leptos SSR rendering under a single Axum router. API handlers share
//! `AppState`; the Leptos routes carry `LeptosOptions`.

pub mod applications;
pub mod auth;
pub mod companies;
pub mod form;
pub mod jobs;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, patch, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::storage::{PUBLIC_PREFIX, UploadError};
use crate::state::AppState;

pub(crate) fn upload_error_to_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::MissingFile(_) | UploadError::UnsupportedType { .. } | UploadError::Empty => {
            StatusCode::BAD_REQUEST
        }
        UploadError::Io(e) => {
            tracing::error!(error = %e, "upload write failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// API, OAuth, health, and upload routes.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let max_upload_bytes = state.config.max_upload_bytes;
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/role", put(auth::set_role))
        .route("/api/companies", get(companies::list_companies).post(companies::create_company))
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/api/jobs/{id}", get(jobs::get_job).delete(jobs::delete_job))
        .route("/api/jobs/{id}/hiring-status", patch(jobs::update_hiring_status))
        .route("/api/jobs/{id}/save", post(jobs::toggle_saved))
        .route("/api/jobs/{id}/applications", post(applications::apply))
        .route("/api/saved-jobs", get(jobs::list_saved_jobs))
        .route("/api/my-jobs", get(jobs::list_my_jobs))
        .route("/api/applications", get(applications::list_mine))
        .route("/api/applications/{id}/status", patch(applications::update_status))
        .route("/healthz", get(healthz))
        .nest_service(PUBLIC_PREFIX, uploads)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
