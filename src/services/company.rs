//! Company directory used by job postings.

use serde::Serialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    #[error("company name is required")]
    InvalidName,
    #[error("company already exists: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
}

/// Trimmed company name, or `InvalidName` when blank.
pub fn normalize_name(raw: &str) -> Result<String, CompanyError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CompanyError::InvalidName);
    }
    Ok(name.to_owned())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// `Duplicate` if a company already uses `name`.
pub async fn ensure_name_available(pool: &PgPool, name: &str) -> Result<(), CompanyError> {
    let taken = sqlx::query("SELECT 1 FROM companies WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?
        .is_some();
    if taken { Err(CompanyError::Duplicate(name.to_owned())) } else { Ok(()) }
}

/// All companies ordered by name.
pub async fn list_companies(pool: &PgPool) -> Result<Vec<CompanyRow>, CompanyError> {
    let rows = sqlx::query("SELECT id, name, logo_url FROM companies ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows
        .into_iter()
        .map(|r| CompanyRow { id: r.get("id"), name: r.get("name"), logo_url: r.get("logo_url") })
        .collect())
}

/// Insert a company with an already-stored logo.
pub async fn create_company(pool: &PgPool, name: &str, logo_url: &str) -> Result<CompanyRow, CompanyError> {
    let name = normalize_name(name)?;
    let row = sqlx::query("INSERT INTO companies (name, logo_url) VALUES ($1, $2) RETURNING id")
        .bind(&name)
        .bind(logo_url)
        .fetch_one(pool)
        .await
        .map_err(|e| if is_unique_violation(&e) { CompanyError::Duplicate(name.clone()) } else { e.into() })?;

    Ok(CompanyRow { id: row.get("id"), name, logo_url: logo_url.to_owned() })
}

#[cfg(test)]
#[path = "company_test.rs"]
mod tests;
