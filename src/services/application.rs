//! Job applications: submission, listing, and recruiter status updates.
//!
//! DESIGN
//! ======
//! A candidate applies at most once per job, enforced by a unique index.
//! Closed jobs reject new applications; existing ones remain visible.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::company::{CompanyRow, is_unique_violation};

pub const EDUCATION_LEVELS: [&str; 3] = ["Intermediate", "Graduate", "Post Graduate"];

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("job not found: {0}")]
    JobNotFound(Uuid),
    #[error("application not found: {0}")]
    NotFound(Uuid),
    #[error("forbidden")]
    Forbidden,
    #[error("already applied to job {0}")]
    AlreadyApplied(Uuid),
    #[error("job {0} is not hiring")]
    HiringClosed(Uuid),
    #[error("invalid application: {0}")]
    InvalidInput(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "applied" => Some(Self::Applied),
            "interviewing" => Some(Self::Interviewing),
            "hired" => Some(Self::Hired),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Job summary attached to a candidate's own applications.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationJob {
    pub title: String,
    pub company: CompanyRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub name: String,
    pub experience: i32,
    pub skills: String,
    pub education: String,
    /// Public URL of the stored resume.
    pub resume: String,
    pub status: ApplicationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<ApplicationJob>,
}

/// Validated form fields of a submission, resume excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFields {
    pub experience: i32,
    pub skills: String,
    pub education: String,
}

/// Validate raw multipart text fields.
///
/// # Errors
///
/// `InvalidInput` naming the first bad field.
pub fn parse_fields(experience: &str, skills: &str, education: &str) -> Result<ApplicationFields, ApplicationError> {
    let experience = experience
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|years| *years >= 0)
        .ok_or(ApplicationError::InvalidInput("experience"))?;
    let skills = skills.trim();
    if skills.is_empty() {
        return Err(ApplicationError::InvalidInput("skills"));
    }
    let education = education.trim();
    if !EDUCATION_LEVELS.contains(&education) {
        return Err(ApplicationError::InvalidInput("education"));
    }
    Ok(ApplicationFields { experience, skills: skills.to_owned(), education: education.to_owned() })
}

fn status_from_row(r: &PgRow) -> ApplicationStatus {
    let raw: String = r.get("status");
    ApplicationStatus::parse(&raw).unwrap_or_default()
}

fn application_from_row(r: &PgRow) -> ApplicationRow {
    ApplicationRow {
        id: r.get("id"),
        job_id: r.get("job_id"),
        candidate_id: r.get("candidate_id"),
        name: r.get("name"),
        experience: r.get("experience"),
        skills: r.get("skills"),
        education: r.get("education"),
        resume: r.get("resume"),
        status: status_from_row(r),
        created_at: r.get("created_at"),
        job: None,
    }
}

const APPLICATION_COLUMNS: &str =
    "a.id, a.job_id, a.candidate_id, a.name, a.experience, a.skills, a.education, a.resume, a.status, a.created_at";

/// Confirm the job exists and is open before a candidate uploads a resume.
pub async fn ensure_accepting(pool: &PgPool, job_id: Uuid, candidate_id: Uuid) -> Result<(), ApplicationError> {
    let row = sqlx::query(
        r"SELECT j.is_open,
                 EXISTS (SELECT 1 FROM applications a WHERE a.job_id = j.id AND a.candidate_id = $2) AS applied
          FROM jobs j WHERE j.id = $1",
    )
    .bind(job_id)
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ApplicationError::JobNotFound(job_id))?;

    if row.get::<bool, _>("applied") {
        return Err(ApplicationError::AlreadyApplied(job_id));
    }
    if !row.get::<bool, _>("is_open") {
        return Err(ApplicationError::HiringClosed(job_id));
    }
    Ok(())
}

/// Record an application. The insert re-checks that the job is open.
pub async fn create_application(
    pool: &PgPool,
    job_id: Uuid,
    candidate_id: Uuid,
    candidate_name: &str,
    fields: &ApplicationFields,
    resume_url: &str,
) -> Result<ApplicationRow, ApplicationError> {
    let row = sqlx::query(&format!(
        r"INSERT INTO applications AS a (job_id, candidate_id, name, experience, skills, education, resume)
          SELECT j.id, $2, $3, $4, $5, $6, $7 FROM jobs j WHERE j.id = $1 AND j.is_open
          RETURNING {APPLICATION_COLUMNS}"
    ))
    .bind(job_id)
    .bind(candidate_id)
    .bind(candidate_name)
    .bind(fields.experience)
    .bind(&fields.skills)
    .bind(&fields.education)
    .bind(resume_url)
    .fetch_optional(pool)
    .await
    .map_err(|e| if is_unique_violation(&e) { ApplicationError::AlreadyApplied(job_id) } else { e.into() })?;

    match row {
        Some(r) => Ok(application_from_row(&r)),
        None => {
            let exists = sqlx::query("SELECT 1 FROM jobs WHERE id = $1").bind(job_id).fetch_optional(pool).await?;
            Err(if exists.is_some() {
                ApplicationError::HiringClosed(job_id)
            } else {
                ApplicationError::JobNotFound(job_id)
            })
        }
    }
}

/// Applications on a job, newest first. `only_candidate` narrows the list
/// to one candidate's own application.
pub async fn list_for_job(
    pool: &PgPool,
    job_id: Uuid,
    only_candidate: Option<Uuid>,
) -> Result<Vec<ApplicationRow>, ApplicationError> {
    let rows = sqlx::query(&format!(
        r"SELECT {APPLICATION_COLUMNS} FROM applications a
          WHERE a.job_id = $1 AND ($2::uuid IS NULL OR a.candidate_id = $2)
          ORDER BY a.created_at DESC"
    ))
    .bind(job_id)
    .bind(only_candidate)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(application_from_row).collect())
}

/// A candidate's applications with the job title and company attached.
pub async fn list_for_candidate(pool: &PgPool, candidate_id: Uuid) -> Result<Vec<ApplicationRow>, ApplicationError> {
    let rows = sqlx::query(&format!(
        r"SELECT {APPLICATION_COLUMNS},
                 j.title AS job_title,
                 c.id AS company_id, c.name AS company_name, c.logo_url AS company_logo_url
          FROM applications a
          JOIN jobs j ON j.id = a.job_id
          JOIN companies c ON c.id = j.company_id
          WHERE a.candidate_id = $1
          ORDER BY a.created_at DESC"
    ))
    .bind(candidate_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| {
            let mut application = application_from_row(r);
            application.job = Some(ApplicationJob {
                title: r.get("job_title"),
                company: CompanyRow {
                    id: r.get("company_id"),
                    name: r.get("company_name"),
                    logo_url: r.get("company_logo_url"),
                },
            });
            application
        })
        .collect())
}

/// Set an application's status. Only the recruiter who owns the job may.
pub async fn update_status(
    pool: &PgPool,
    recruiter_id: Uuid,
    application_id: Uuid,
    status: ApplicationStatus,
) -> Result<(), ApplicationError> {
    let owner: Uuid = sqlx::query(
        r"SELECT j.recruiter_id FROM applications a JOIN jobs j ON j.id = a.job_id WHERE a.id = $1",
    )
    .bind(application_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ApplicationError::NotFound(application_id))?
    .get("recruiter_id");

    if owner != recruiter_id {
        return Err(ApplicationError::Forbidden);
    }

    sqlx::query("UPDATE applications SET status = $2 WHERE id = $1")
        .bind(application_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    tracing::info!(%application_id, status = status.as_str(), "application status updated");
    Ok(())
}

#[cfg(test)]
#[path = "application_test.rs"]
mod tests;
