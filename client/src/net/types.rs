//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies produced by the `/api` handlers so
//! serde round-trips stay lossless. Records are display-only; the server owns
//! every invariant.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// End-user role chosen during onboarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

    /// Route a user lands on after picking this role.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Candidate => "/jobs",
            Self::Recruiter => "/post-job",
        }
    }
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name from the identity provider.
    pub name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    /// `None` until the user completes onboarding.
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}

/// Lifecycle of an application as managed by the job's recruiter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interviewing, Self::Hired, Self::Rejected];

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
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Job title and company attached to a candidate's own applications.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationJob {
    pub title: String,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    /// Candidate display name captured at submission time.
    pub name: String,
    pub experience: i32,
    pub skills: String,
    pub education: String,
    /// Public URL of the uploaded resume.
    pub resume: String,
    pub status: ApplicationStatus,
    /// RFC 3339 timestamp.
    pub created_at: String,
    #[serde(default)]
    pub job: Option<ApplicationJob>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub recruiter_id: String,
    pub company: Company,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Markdown source.
    pub requirements: String,
    pub is_open: bool,
    pub created_at: String,
    /// Whether the current viewer has saved this job.
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub application_count: usize,
    /// Present on the detail endpoint only.
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Job {
    #[must_use]
    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.id == self.recruiter_id)
    }

    /// The viewer's application to this job, if any.
    #[must_use]
    pub fn application_of(&self, user: Option<&User>) -> Option<&Application> {
        let user = user?;
        self.applications.iter().find(|a| a.candidate_id == user.id)
    }
}

/// Query parameters for `GET /api/jobs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub company_id: String,
}

impl JobFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.location.is_empty() && self.company_id.is_empty()
    }
}

/// Body of `POST /api/jobs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub company_id: String,
    pub requirements: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveToggle {
    pub saved: bool,
}
