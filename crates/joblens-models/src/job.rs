//! Job and profile payload models.
//!
//! Field names follow the remote service's wire format, so these types
//! deserialize straight out of the response bodies.

use serde::{Deserialize, Serialize};

/// One job card in the listing, or one "similar job" on the detail view.
///
/// Immutable once received; lives inside the owning fetch state's Success
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    /// Compensation band, e.g. "10 LPA".
    pub package_per_annum: String,
    pub company_logo_url: String,
    pub job_description: String,
}

/// A named skill with its badge image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

/// "Life at company" blurb on the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

/// Full job detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub job_description: String,
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

/// Profile card shown alongside the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub short_bio: String,
    pub profile_image_url: String,
}
