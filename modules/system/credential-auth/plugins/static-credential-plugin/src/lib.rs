#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Credential Validator Plugin
//!
//! This plugin checks usernames and passwords against a list from
//! configuration and returns the policies and groups configured for each
//! user. Intended for development and tests in place of a real identity
//! provider.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_credential_plugin:
//!     config:
//!       unavailable: false
//!       users:
//!         - username: "alice"
//!           password: "change-me"
//!           policies: ["dev", "ops"]
//!           groups: ["team-x"]
//! ```

pub mod config;
pub mod domain;

pub use domain::Service;
