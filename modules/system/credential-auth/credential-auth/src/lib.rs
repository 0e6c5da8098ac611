//! Credential Auth Module
//!
//! Username/password login backed by an external identity provider.
//! A successful login becomes a renewable, time-bounded grant whose TTL is
//! capped by the backend and system ceilings; renewal re-validates the
//! credential and refuses to extend a grant whose policies have changed.
//!
//! Provides the `CredentialAuthClient` implementation consumed by the
//! request-routing layer.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::{CredentialAuthConfig, SystemCeilingConfig};
pub use module::CredentialAuthModule;
