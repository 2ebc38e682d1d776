//! Form validation for the apply, post-job, and add-company forms.
//!
//! DESIGN
//! ======
//! Forms keep raw strings in signals; validation converts them into request
//! payloads or a list of per-field messages rendered under each input. Upload
//! checks only look at the file name; the server re-checks the extension.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::api::ApplicationSubmission;
use crate::net::types::NewJob;

pub const EDUCATION_LEVELS: [&str; 3] = ["Intermediate", "Graduate", "Post Graduate"];
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
pub const LOGO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Per-field validation messages, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Whether `file_name` ends in one of `allowed` (case-insensitive).
#[must_use]
pub fn has_allowed_extension(file_name: &str, allowed: &[&str]) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| allowed.contains(&ext.as_str()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyForm {
    pub experience: String,
    pub skills: String,
    pub education: String,
    /// Name of the picked resume file, if any.
    pub resume_name: Option<String>,
}

impl ApplyForm {
    /// # Errors
    ///
    /// Returns every failing field when the form is incomplete.
    pub fn validate(&self) -> Result<ApplicationSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let experience = match self.experience.trim() {
            "" => {
                errors.push("experience", "Experience is required");
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(years) => Some(years),
                Err(_) => {
                    errors.push("experience", "Experience must be a whole number of years (0 or more)");
                    None
                }
            },
        };

        let skills = self.skills.trim();
        if skills.is_empty() {
            errors.push("skills", "Skills are required");
        }

        if !EDUCATION_LEVELS.contains(&self.education.as_str()) {
            errors.push("education", "Education is required");
        }

        match self.resume_name.as_deref() {
            None | Some("") => errors.push("resume", "Resume is required"),
            Some(name) if !has_allowed_extension(name, &RESUME_EXTENSIONS) => {
                errors.push("resume", "Only PDF or Word documents are allowed");
            }
            Some(_) => {}
        }

        match experience {
            Some(experience) if errors.is_empty() => Ok(ApplicationSubmission {
                experience,
                skills: skills.to_owned(),
                education: self.education.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostJobForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub company_id: String,
    pub requirements: String,
}

impl PostJobForm {
    /// # Errors
    ///
    /// Returns every failing field when the form is incomplete.
    pub fn validate(&self) -> Result<NewJob, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = self.title.trim();
        let description = self.description.trim();
        let requirements = self.requirements.trim();

        if title.is_empty() {
            errors.push("title", "Title is required");
        }
        if description.is_empty() {
            errors.push("description", "Description is required");
        }
        if self.location.is_empty() {
            errors.push("location", "Select a location");
        }
        if self.company_id.is_empty() {
            errors.push("company_id", "Select or add a new company");
        }
        if requirements.is_empty() {
            errors.push("requirements", "Requirements are required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewJob {
            title: title.to_owned(),
            description: description.to_owned(),
            location: self.location.clone(),
            company_id: self.company_id.clone(),
            requirements: requirements.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub name: String,
    pub logo_name: Option<String>,
}

impl CompanyForm {
    /// Returns the trimmed company name.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the form is incomplete.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Company name is required");
        }
        match self.logo_name.as_deref() {
            None | Some("") => errors.push("logo", "Logo is required"),
            Some(logo) if !has_allowed_extension(logo, &LOGO_EXTENSIONS) => {
                errors.push("logo", "Only PNG or JPEG images are allowed");
            }
            Some(_) => {}
        }
        if errors.is_empty() { Ok(name.to_owned()) } else { Err(errors) }
    }
}
