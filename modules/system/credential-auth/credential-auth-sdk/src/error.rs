//! Error types for the credential auth module.

use thiserror::Error;

/// Errors that can occur when using the credential auth API.
///
/// A rejected credential is not an error: it is reported as
/// [`LoginOutcome::Rejected`](crate::LoginOutcome::Rejected) so callers
/// cannot mistake a provider outage for a bad password.
#[derive(Debug, Error)]
pub enum CredentialAuthError {
    /// The request is malformed (e.g. missing username).
    #[error("{0}")]
    Validation(String),

    /// No lease configuration has been stored for the backend.
    #[error("backend not configured")]
    NotConfigured,

    /// The identity provider could not be reached or failed.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The policies granted to the credential changed since login.
    #[error("policies have changed, not renewing")]
    PoliciesChanged,

    /// The grant has outlived its maximum lifetime.
    #[error("past the max TTL, cannot renew")]
    PastMaxTtl,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CredentialAuthError {
    /// Whether the error is meant to be shown to the caller as a denial
    /// rather than treated as a system fault.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::PoliciesChanged | Self::PastMaxTtl
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn drift_refusal_message_is_stable() {
        assert_eq!(
            CredentialAuthError::PoliciesChanged.to_string(),
            "policies have changed, not renewing"
        );
    }

    #[test]
    fn provider_outage_is_not_user_facing() {
        assert!(!CredentialAuthError::ProviderUnavailable("timeout".to_owned()).is_user_facing());
        assert!(!CredentialAuthError::NotConfigured.is_user_facing());
        assert!(CredentialAuthError::Validation("missing username".to_owned()).is_user_facing());
    }
}
