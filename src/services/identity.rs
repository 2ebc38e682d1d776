//! OAuth identity provider: authorize URL, code exchange, profile fetch,
//! user upsert, and one-time role selection.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Identity-provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl IdentityConfig {
    /// Load from the `IDP_*` variables.
    /// Returns `None` if any are missing (sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: get("IDP_CLIENT_ID")?,
            client_secret: get("IDP_CLIENT_SECRET")?,
            redirect_uri: get("IDP_REDIRECT_URI")?,
            authorize_url: get("IDP_AUTHORIZE_URL")?,
            token_url: get("IDP_TOKEN_URL")?,
            userinfo_url: get("IDP_USERINFO_URL")?,
        })
    }

    /// Build the provider authorization URL carrying the CSRF `state`.
    #[must_use]
    pub fn authorize_redirect(&self, state: &str) -> String {
        let separator = if self.authorize_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}response_type=code&client_id={}&redirect_uri={}&scope={}&state={}",
            self.authorize_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode("openid profile email"),
            urlencoding::encode(state),
        )
    }
}

/// Account role, chosen once during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "candidate" => Some(Self::Candidate),
            "recruiter" => Some(Self::Recruiter),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Standard OpenID Connect userinfo claims used here.
#[derive(Debug, Deserialize)]
pub struct ProviderProfile {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl ProviderProfile {
    /// Name to show in the UI: `name`, else the email local part, else a
    /// placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        if let Some(local) = self.email.as_deref().and_then(|e| e.split('@').next()).filter(|l| !l.is_empty()) {
            return local.to_owned();
        }
        "HireHub user".to_owned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("identity provider error: {0}")]
    ProviderApi(String),
    #[error("role already set")]
    RoleAlreadySet,
    #[error("user not found: {0}")]
    UserNotFound(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(config: &IdentityConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(&config.token_url)
        .header("Accept", "application/json")
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    if !status.is_success() {
        return Err(AuthError::TokenExchange(format!("{status}: {body}")));
    }
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the signed-in user's profile from the userinfo endpoint.
pub async fn fetch_profile(config: &IdentityConfig, access_token: &str) -> Result<ProviderProfile, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(&config.userinfo_url)
        .header("Authorization", format!("Bearer {access_token}"))
        .header("User-Agent", "hirehub")
        .send()
        .await
        .map_err(|e| AuthError::ProviderApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::ProviderApi(format!("{status}: {body}")));
    }

    resp.json::<ProviderProfile>()
        .await
        .map_err(|e| AuthError::ProviderApi(e.to_string()))
}

/// Upsert a user from their provider profile. Returns the user id and the
/// stored role, which survives re-login.
pub async fn upsert_user(pool: &PgPool, profile: &ProviderProfile) -> Result<(Uuid, Option<Role>), AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (subject, name, email, avatar_url)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (subject) DO UPDATE
              SET name = EXCLUDED.name, email = EXCLUDED.email, avatar_url = EXCLUDED.avatar_url
          RETURNING id, role",
    )
    .bind(&profile.sub)
    .bind(profile.display_name())
    .bind(&profile.email)
    .bind(&profile.picture)
    .fetch_one(pool)
    .await?;

    let role: Option<String> = row.get("role");
    Ok((row.get("id"), role.as_deref().and_then(Role::parse)))
}

/// Set the role of a user who has none yet.
///
/// # Errors
///
/// `RoleAlreadySet` when a role was chosen before.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), AuthError> {
    let updated = sqlx::query("UPDATE users SET role = $2 WHERE id = $1 AND role IS NULL")
        .bind(user_id)
        .bind(role.as_str())
        .execute(pool)
        .await?
        .rows_affected();
    if updated == 1 {
        return Ok(());
    }

    let exists = sqlx::query("SELECT 1 FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .is_some();
    if exists { Err(AuthError::RoleAlreadySet) } else { Err(AuthError::UserNotFound(user_id)) }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
