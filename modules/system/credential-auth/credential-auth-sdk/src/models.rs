//! Domain models for the credential auth module.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Well-known keys of [`Grant::metadata`].
pub mod metadata_keys {
    pub const USERNAME: &str = "username";
    pub const POLICIES: &str = "policies";
}

/// Login request delivered by the routing layer.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Principal name. Must be non-empty.
    pub username: String,
    /// Opaque secret checked by the identity provider.
    pub password: SecretString,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Renewal request: the grant being renewed plus the caller's requested
/// increment, if any.
#[derive(Debug, Clone)]
pub struct RenewRequest {
    pub grant: Grant,
    /// Requested TTL for the renewed lease. `None` or zero falls back to the
    /// configured TTL.
    pub increment: Option<Duration>,
}

impl RenewRequest {
    #[must_use]
    pub fn new(grant: Grant) -> Self {
        Self {
            grant,
            increment: None,
        }
    }

    #[must_use]
    pub fn with_increment(mut self, increment: Duration) -> Self {
        self.increment = Some(increment);
        self
    }
}

/// What the identity provider decided about a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The credential is valid.
    Authenticated(ValidatedIdentity),
    /// The credential was refused; shown to the caller as-is.
    Rejected(LogicalFailure),
}

/// Authorization data returned for a valid credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedIdentity {
    /// Granted policy names, in provider order. May be empty.
    pub policies: Vec<String>,
    /// Group names, in provider order. May contain empty entries.
    pub groups: Vec<String>,
    /// Non-fatal notices from the provider, forwarded to the response.
    pub warnings: Vec<String>,
}

/// A user-visible authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalFailure {
    pub reason: String,
}

impl LogicalFailure {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A name used by the identity-correlation subsystem to link logins of the
/// same principal or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
}

impl Alias {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Validity window of a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaseOptions {
    pub ttl: Duration,
    pub renewable: bool,
    /// When the grant was first issued. Renewals never move it.
    pub issued_at: DateTime<Utc>,
}

/// Data kept with the grant for the backend only.
#[derive(Debug, Clone)]
pub struct GrantInternalData {
    /// Needed to re-validate the credential on renewal.
    pub password: SecretString,
}

/// The authorization artifact issued on login.
#[derive(Debug, Clone)]
pub struct Grant {
    /// Sorted, de-duplicated policy names.
    pub policies: Vec<String>,
    /// `username` and comma-joined `policies`, see [`metadata_keys`].
    pub metadata: BTreeMap<String, String>,
    pub internal_data: GrantInternalData,
    pub display_name: String,
    pub lease: LeaseOptions,
    pub alias: Alias,
    pub group_aliases: Vec<Alias>,
}

impl Grant {
    /// Username recorded at login.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.metadata
            .get(metadata_keys::USERNAME)
            .map(String::as_str)
    }
}

/// A grant together with the non-fatal warnings produced while building it.
#[derive(Debug, Clone)]
pub struct GrantResponse {
    pub grant: Grant,
    pub warnings: Vec<String>,
}

/// Result of a login that did not hit a system fault.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Granted(GrantResponse),
    Rejected(LogicalFailure),
}

/// Result of a renewal that did not hit a system fault or a policy change.
#[derive(Debug, Clone)]
pub enum RenewalOutcome {
    Renewed(GrantResponse),
    /// Re-validation produced no policies; its outcome is passed through
    /// untouched and the grant is not extended.
    NotRenewed(ValidationOutcome),
}

/// Lease settings stored for the backend.
///
/// A zero `ttl` means "use the system default"; a zero `max_ttl` means
/// "no backend-specific cap".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaseConfig {
    #[serde(with = "serde_duration")]
    pub ttl: Duration,
    #[serde(with = "serde_duration")]
    pub max_ttl: Duration,
}

impl LeaseConfig {
    #[must_use]
    pub fn new(ttl: Duration, max_ttl: Duration) -> Self {
        Self { ttl, max_ttl }
    }
}

/// Human-readable (`"1h 30m"`) duration fields.
pub mod serde_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    /// # Errors
    ///
    /// Fails when the value is not a humantime duration string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn lease_config_reads_humantime_values() {
        let cfg: LeaseConfig = serde_json::from_str(r#"{"ttl":"1h","max_ttl":"2h 30m"}"#).unwrap();
        assert_eq!(cfg.ttl, Duration::from_secs(3600));
        assert_eq!(cfg.max_ttl, Duration::from_secs(9000));
    }

    #[test]
    fn lease_config_missing_fields_are_zero() {
        let cfg: LeaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, LeaseConfig::default());
    }

    #[test]
    fn lease_config_rejects_garbage_duration() {
        let res = serde_json::from_str::<LeaseConfig>(r#"{"ttl":"soon"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn lease_config_serializes_as_humantime() {
        let json = serde_json::to_string(&LeaseConfig::new(
            Duration::from_secs(7200),
            Duration::ZERO,
        ))
        .unwrap();
        assert_eq!(json, r#"{"ttl":"2h","max_ttl":"0s"}"#);
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let req = LoginRequest::new("alice", "hunter2".to_owned());
        let rendered = format!("{req:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
