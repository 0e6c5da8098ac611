//! Domain errors for credential auth.

use credential_auth_sdk::CredentialAuthError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("missing {field}")]
    MissingField { field: &'static str },

    #[error("backend not configured")]
    NotConfigured,

    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("policies have changed, not renewing")]
    PoliciesChanged,

    #[error("past the max TTL, cannot renew")]
    PastMaxTtl,

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<CredentialAuthError> for DomainError {
    fn from(e: CredentialAuthError) -> Self {
        match e {
            CredentialAuthError::Validation(msg) | CredentialAuthError::Internal(msg) => {
                Self::Internal(msg)
            }
            CredentialAuthError::NotConfigured => Self::NotConfigured,
            CredentialAuthError::ProviderUnavailable(msg) => Self::ProviderUnavailable(msg),
            CredentialAuthError::PoliciesChanged => Self::PoliciesChanged,
            CredentialAuthError::PastMaxTtl => Self::PastMaxTtl,
        }
    }
}

impl From<DomainError> for CredentialAuthError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingField { .. } => Self::Validation(e.to_string()),
            DomainError::NotConfigured => Self::NotConfigured,
            DomainError::ProviderUnavailable(msg) => Self::ProviderUnavailable(msg),
            DomainError::PoliciesChanged => Self::PoliciesChanged,
            DomainError::PastMaxTtl => Self::PastMaxTtl,
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn missing_username_maps_to_validation() {
        let err: CredentialAuthError = DomainError::MissingField { field: "username" }.into();
        match err {
            CredentialAuthError::Validation(msg) => assert_eq!(msg, "missing username"),
            other => panic!("Expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn provider_validation_error_is_internal_to_the_core() {
        // A validator complaining about its own input is a fault on our side.
        let err: DomainError = CredentialAuthError::Validation("bad".to_owned()).into();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
