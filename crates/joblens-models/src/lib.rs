//! Shared data models for the JobLens client.
//!
//! This crate provides Serde-serializable types for:
//! - Closed filter enumerations (employment type, location, salary floor)
//! - Filter state and its canonical query encoding
//! - The fetch lifecycle value shared by every remote retrieval
//! - Job, job detail and profile payloads

pub mod enums;
pub mod fetch;
pub mod filters;
pub mod job;
pub mod query;

// Re-export common types
pub use enums::{EmploymentType, FilterIdError, Location, SalaryFloor};
pub use fetch::{FetchFailure, FetchState};
pub use filters::{FetchPolicy, FilterState};
pub use job::{JobDetail, JobSummary, LifeAtCompany, ProfileSummary, Skill};
pub use query::QuerySpec;
