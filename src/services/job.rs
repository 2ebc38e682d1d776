//! Job postings: listing with filters, detail, create/delete, hiring
//! status, and saved-job bookmarks.
//!
//! DESIGN
//! ======
//! Every read goes through one SELECT assembled by `push_job_query`, which
//! joins the company and computes the viewer's `saved` flag. Scopes only
//! add WHERE clauses, so list, saved, and posted views share row mapping.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::application::{self, ApplicationRow};
use crate::services::company::CompanyRow;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job not found: {0}")]
    NotFound(Uuid),
    #[error("company not found: {0}")]
    UnknownCompany(Uuid),
    #[error("forbidden")]
    Forbidden,
    #[error("invalid job: {0} is required")]
    InvalidInput(&'static str),
    #[error("application error: {0}")]
    Application(#[from] application::ApplicationError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRow {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub company: CompanyRow,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Markdown source.
    pub requirements: String,
    pub is_open: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub saved: bool,
    /// Total applications, independent of which ones the viewer may see.
    pub application_count: i64,
    pub applications: Vec<ApplicationRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub company_id: Uuid,
    pub requirements: String,
}

impl NewJob {
    /// Trim every text field and require each to be non-empty.
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the first blank field.
    pub fn normalized(self) -> Result<Self, JobError> {
        let field = |value: String, name: &'static str| {
            let trimmed = value.trim();
            if trimmed.is_empty() { Err(JobError::InvalidInput(name)) } else { Ok(trimmed.to_owned()) }
        };
        Ok(Self {
            title: field(self.title, "title")?,
            description: field(self.description, "description")?,
            location: field(self.location, "location")?,
            company_id: self.company_id,
            requirements: field(self.requirements, "requirements")?,
        })
    }
}

/// Filters for the public job list. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub location: Option<String>,
    pub company_id: Option<Uuid>,
    pub search: Option<String>,
}

/// Which jobs a list query returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobScope {
    All(JobFilter),
    SavedBy(Uuid),
    PostedBy(Uuid),
    One(Uuid),
}

/// Escape `%`, `_` and `\` for a Postgres `LIKE` pattern.
#[must_use]
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build the job SELECT for `viewer` and `scope`.
pub fn push_job_query<'a>(qb: &mut QueryBuilder<'a, Postgres>, viewer: Uuid, scope: &'a JobScope) {
    qb.push(
        r"SELECT j.id, j.recruiter_id, j.title, j.description, j.location, j.requirements, j.is_open, j.created_at,
                 c.id AS company_id, c.name AS company_name, c.logo_url AS company_logo_url,
                 (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count,
                 EXISTS (SELECT 1 FROM saved_jobs s WHERE s.job_id = j.id AND s.user_id = ",
    );
    qb.push_bind(viewer);
    qb.push(") AS saved FROM jobs j JOIN companies c ON c.id = j.company_id WHERE TRUE");

    match scope {
        JobScope::All(filter) => {
            if let Some(location) = filter.location.as_deref().filter(|l| !l.is_empty()) {
                qb.push(" AND j.location = ").push_bind(location);
            }
            if let Some(company_id) = filter.company_id {
                qb.push(" AND j.company_id = ").push_bind(company_id);
            }
            if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                qb.push(" AND j.title ILIKE ").push_bind(format!("%{}%", escape_like(search)));
            }
        }
        JobScope::SavedBy(user_id) => {
            qb.push(" AND EXISTS (SELECT 1 FROM saved_jobs s2 WHERE s2.job_id = j.id AND s2.user_id = ")
                .push_bind(*user_id)
                .push(")");
        }
        JobScope::PostedBy(recruiter_id) => {
            qb.push(" AND j.recruiter_id = ").push_bind(*recruiter_id);
        }
        JobScope::One(job_id) => {
            qb.push(" AND j.id = ").push_bind(*job_id);
        }
    }

    qb.push(" ORDER BY j.created_at DESC");
}

fn job_from_row(r: &PgRow) -> JobRow {
    JobRow {
        id: r.get("id"),
        recruiter_id: r.get("recruiter_id"),
        company: CompanyRow {
            id: r.get("company_id"),
            name: r.get("company_name"),
            logo_url: r.get("company_logo_url"),
        },
        title: r.get("title"),
        description: r.get("description"),
        location: r.get("location"),
        requirements: r.get("requirements"),
        is_open: r.get("is_open"),
        created_at: r.get("created_at"),
        saved: r.get("saved"),
        application_count: r.get("application_count"),
        applications: Vec::new(),
    }
}

/// Jobs in `scope`, newest first, with the viewer's saved flag.
pub async fn list_jobs(pool: &PgPool, viewer: Uuid, scope: &JobScope) -> Result<Vec<JobRow>, JobError> {
    let mut qb = QueryBuilder::new("");
    push_job_query(&mut qb, viewer, scope);
    let rows = qb.build().fetch_all(pool).await?;
    Ok(rows.iter().map(job_from_row).collect())
}

/// One job with its applications. The owning recruiter sees every
/// application; anyone else sees only their own.
pub async fn get_job(pool: &PgPool, viewer: Uuid, job_id: Uuid) -> Result<JobRow, JobError> {
    let scope = JobScope::One(job_id);
    let mut job = list_jobs(pool, viewer, &scope)
        .await?
        .into_iter()
        .next()
        .ok_or(JobError::NotFound(job_id))?;

    let only_candidate = (job.recruiter_id != viewer).then_some(viewer);
    job.applications = application::list_for_job(pool, job_id, only_candidate).await?;
    Ok(job)
}

/// Insert an open job owned by `recruiter_id`.
pub async fn create_job(pool: &PgPool, recruiter_id: Uuid, new_job: NewJob) -> Result<JobRow, JobError> {
    let new_job = new_job.normalized()?;
    let company_exists = sqlx::query("SELECT 1 FROM companies WHERE id = $1")
        .bind(new_job.company_id)
        .fetch_optional(pool)
        .await?
        .is_some();
    if !company_exists {
        return Err(JobError::UnknownCompany(new_job.company_id));
    }

    let job_id: Uuid = sqlx::query(
        r"INSERT INTO jobs (recruiter_id, company_id, title, description, location, requirements)
          VALUES ($1, $2, $3, $4, $5, $6)
          RETURNING id",
    )
    .bind(recruiter_id)
    .bind(new_job.company_id)
    .bind(&new_job.title)
    .bind(&new_job.description)
    .bind(&new_job.location)
    .bind(&new_job.requirements)
    .fetch_one(pool)
    .await?
    .get("id");

    tracing::info!(%job_id, %recruiter_id, "job created");
    get_job(pool, recruiter_id, job_id).await
}

/// `Forbidden` unless `viewer` owns the job.
pub fn check_owner(owner: Uuid, viewer: Uuid) -> Result<(), JobError> {
    if owner == viewer { Ok(()) } else { Err(JobError::Forbidden) }
}

async fn job_owner(pool: &PgPool, job_id: Uuid) -> Result<Uuid, JobError> {
    let row = sqlx::query("SELECT recruiter_id FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or(JobError::NotFound(job_id))?;
    Ok(row.get("recruiter_id"))
}

/// Delete a job and, by cascade, its applications and bookmarks.
pub async fn delete_job(pool: &PgPool, recruiter_id: Uuid, job_id: Uuid) -> Result<(), JobError> {
    check_owner(job_owner(pool, job_id).await?, recruiter_id)?;
    sqlx::query("DELETE FROM jobs WHERE id = $1").bind(job_id).execute(pool).await?;
    tracing::info!(%job_id, "job deleted");
    Ok(())
}

/// Open or close hiring on a job.
pub async fn set_hiring_status(pool: &PgPool, recruiter_id: Uuid, job_id: Uuid, is_open: bool) -> Result<(), JobError> {
    check_owner(job_owner(pool, job_id).await?, recruiter_id)?;
    sqlx::query("UPDATE jobs SET is_open = $2 WHERE id = $1")
        .bind(job_id)
        .bind(is_open)
        .execute(pool)
        .await?;
    tracing::info!(%job_id, is_open, "hiring status updated");
    Ok(())
}

/// Flip the viewer's bookmark on a job. Returns whether it is now saved.
pub async fn toggle_saved(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<bool, JobError> {
    job_owner(pool, job_id).await?;

    let removed = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await?
        .rows_affected();
    if removed > 0 {
        return Ok(false);
    }

    sqlx::query("INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await?;
    Ok(true)
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
