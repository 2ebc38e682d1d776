//! Auth routes: identity-provider OAuth flow, session management, role
//! selection.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::identity::{self, AuthError, Role};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("IDP_REDIRECT_URI")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

/// Where a freshly signed-in user lands.
pub(crate) fn post_login_path(role: Option<Role>) -> &'static str {
    if role.is_some() { "/jobs" } else { "/onboarding" }
}

fn cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut c = cookie(name, String::new(), secure);
    c.set_max_age(Duration::ZERO);
    c
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl AuthUser {
    /// `403` unless the user chose `role` during onboarding.
    pub fn require_role(&self, role: Role) -> Result<(), StatusCode> {
        if self.user.has_role(role) { Ok(()) } else { Err(StatusCode::FORBIDDEN) }
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::TokenExchange(_) | AuthError::ProviderApi(_) => StatusCode::BAD_GATEWAY,
        AuthError::RoleAlreadySet => StatusCode::CONFLICT,
        AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
        AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/login` — redirect to the identity provider.
pub async fn login(State(state): State<AppState>) -> Response {
    let Some(config) = &state.identity else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Sign-in is not configured").into_response();
    };

    let oauth_state = session::generate_token();
    let mut state_cookie = cookie(OAUTH_STATE_COOKIE_NAME, oauth_state.clone(), cookie_secure());
    state_cookie.set_max_age(Duration::minutes(10));

    let jar = CookieJar::new().add(state_cookie);
    (jar, Redirect::temporary(&config.authorize_redirect(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
}

/// `GET /auth/callback` — exchange code, upsert user, set cookie, redirect.
pub async fn callback(State(state): State<AppState>, jar: CookieJar, Query(params): Query<CallbackQuery>) -> Response {
    let Some(config) = &state.identity else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Sign-in is not configured").into_response();
    };
    let secure = cookie_secure();

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    let expected_state = jar.get(OAUTH_STATE_COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing authorization code").into_response();
    };

    let access_token = match identity::exchange_code(config, code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (auth_error_to_status(&e), "OAuth code exchange failed").into_response();
        }
    };

    let profile = match identity::fetch_profile(config, &access_token).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "userinfo fetch failed");
            return (auth_error_to_status(&e), "Failed to fetch profile").into_response();
        }
    };

    let (user_id, role) = match identity::upsert_user(&state.pool, &profile).await {
        Ok(found) => found,
        Err(e) => {
            tracing::error!(error = %e, "user upsert failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };
    tracing::info!(%user_id, "signed in");

    let jar = jar
        .add(cookie(COOKIE_NAME, token, secure))
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure));
    (jar, Redirect::temporary(post_login_path(role))).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct SetRoleBody {
    pub role: Role,
}

/// `PUT /api/auth/role` — choose a role once.
pub async fn set_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SetRoleBody>,
) -> Result<Json<SessionUser>, StatusCode> {
    if auth.user.role.is_some() {
        return Err(StatusCode::CONFLICT);
    }
    identity::set_role(&state.pool, auth.user.id, body.role).await.map_err(|e| {
        if matches!(e, AuthError::Db(_)) {
            tracing::error!(error = %e, "role update failed");
        }
        auth_error_to_status(&e)
    })?;

    tracing::info!(user_id = %auth.user.id, role = body.role.as_str(), "role selected");
    Ok(Json(SessionUser { role: Some(body.role), ..auth.user }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
