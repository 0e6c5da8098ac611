//! Credential Auth SDK
//!
//! This crate provides the public API for the `credential_auth` module:
//!
//! - [`CredentialAuthClient`] - Public API trait for the request-routing layer
//! - [`CredentialValidatorPluginClient`] - Identity provider trait for implementations
//! - [`LeaseConfigSource`] / [`SystemCeiling`] - Lease configuration collaborators
//! - [`Grant`], [`LoginOutcome`], [`RenewalOutcome`] - Login and renewal models
//! - [`CredentialAuthError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use credential_auth_sdk::{CredentialAuthClient, LoginOutcome, LoginRequest};
//!
//! let outcome = client
//!     .login(LoginRequest::new("alice", "s3cret".to_owned()))
//!     .await?;
//!
//! match outcome {
//!     LoginOutcome::Granted(resp) => store(resp.grant),
//!     LoginOutcome::Rejected(failure) => deny(failure.reason),
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::{CredentialAuthClient, LOGIN_HELP_DESCRIPTION, LOGIN_HELP_SYNOPSIS};
pub use error::CredentialAuthError;
pub use models::{
    Alias, Grant, GrantInternalData, GrantResponse, LeaseConfig, LeaseOptions, LogicalFailure,
    LoginOutcome, LoginRequest, RenewRequest, RenewalOutcome, ValidatedIdentity,
    ValidationOutcome, metadata_keys,
};
pub use plugin_api::{CredentialValidatorPluginClient, LeaseConfigSource, SystemCeiling};
