//! HTTP client for the remote jobs service.
//!
//! This crate provides:
//! - A credential store holding the session token with its expiry
//! - An authorized API client (login, profile, jobs listing, job detail)
//! - The error taxonomy every fetch failure is folded into

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;


pub use client::{ApiClient, ApiConfig};
pub use credentials::CredentialStore;
pub use error::{ClientError, ClientResult};
pub use types::{LoginRequest, LoginResponse};
