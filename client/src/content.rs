//! Static landing-page and filter content.
//!
//! These lists ship with the bundle; nothing here is fetched.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A logo in the landing-page company strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyLogo {
    pub id: u32,
    pub name: &'static str,
    pub path: &'static str,
}

pub const COMPANY_LOGOS: [CompanyLogo; 8] = [
    CompanyLogo { id: 1, name: "amazon", path: "/companies/amazon.svg" },
    CompanyLogo { id: 2, name: "atlassian", path: "/companies/atlassian.svg" },
    CompanyLogo { id: 3, name: "google", path: "/companies/google.svg" },
    CompanyLogo { id: 4, name: "ibm", path: "/companies/ibm.svg" },
    CompanyLogo { id: 5, name: "meta", path: "/companies/meta.svg" },
    CompanyLogo { id: 6, name: "microsoft", path: "/companies/microsoft.svg" },
    CompanyLogo { id: 7, name: "netflix", path: "/companies/netflix.svg" },
    CompanyLogo { id: 8, name: "uber", path: "/companies/uber.svg" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "What is HireHub?",
        answer: "HireHub is a job board where candidates find and apply to jobs and recruiters post openings and manage applicants.",
    },
    Faq {
        question: "How do I post a job?",
        answer: "Sign in, choose the Recruiter role during onboarding, then use Post a Job to publish a listing with its requirements.",
    },
    Faq {
        question: "How do I apply for a job?",
        answer: "Open a job, press Apply, fill in your experience, skills, and education, and upload your resume as a PDF or Word file.",
    },
    Faq {
        question: "Can I save jobs for later?",
        answer: "Yes. Use the heart on any job card; saved jobs are listed under Saved Jobs.",
    },
    Faq {
        question: "How do recruiters track applications?",
        answer: "Each job you post lists its applicants. Move them through Applied, Interviewing, Hired, or Rejected, and close hiring when the role is filled.",
    },
];

/// Locations offered by the listing filter and the post-job form.
pub const LOCATIONS: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// How often the company strip advances on the landing page.
pub const LOGO_STRIP_INTERVAL_MS: u32 = 2000;

/// Index of the first logo shown after `ticks` advances.
#[must_use]
pub fn logo_strip_offset(ticks: usize) -> usize {
    ticks % COMPANY_LOGOS.len()
}

/// The strip rotated so `offset` comes first.
#[must_use]
pub fn rotated_logos(offset: usize) -> Vec<CompanyLogo> {
    let mut logos = COMPANY_LOGOS.to_vec();
    logos.rotate_left(offset % COMPANY_LOGOS.len());
    logos
}
