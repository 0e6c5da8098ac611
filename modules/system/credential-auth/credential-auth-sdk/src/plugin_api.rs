//! Collaborator traits consumed by the credential auth core.
//!
//! The identity provider, the lease configuration store and the system TTL
//! ceiling live outside this module. The core receives them as explicit
//! handles so tests can swap in fakes.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::CredentialAuthError;
use crate::models::{LeaseConfig, ValidationOutcome};

/// Identity provider client that checks a username/password pair.
///
/// Implementations own their timeout and retry discipline; the core calls
/// this once per login or renewal and never caches the answer.
#[async_trait]
pub trait CredentialValidatorPluginClient: Send + Sync {
    /// Validate a credential.
    ///
    /// # Errors
    ///
    /// - `ProviderUnavailable` if the provider cannot be reached
    /// - `Internal` for unexpected errors
    ///
    /// A wrong password is not an error: return
    /// [`ValidationOutcome::Rejected`].
    async fn validate(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<ValidationOutcome, CredentialAuthError>;
}

/// Read-only access to the stored lease configuration.
#[async_trait]
pub trait LeaseConfigSource: Send + Sync {
    /// Current lease configuration, or `None` if the backend was never
    /// configured.
    ///
    /// # Errors
    ///
    /// - `Internal` if the store cannot be read
    async fn lease_config(&self) -> Result<Option<LeaseConfig>, CredentialAuthError>;
}

/// Deployment-wide lease TTL bounds.
pub trait SystemCeiling: Send + Sync {
    /// TTL used when the backend configures none.
    fn default_lease_ttl(&self) -> Duration;

    /// Upper bound no backend configuration may exceed.
    fn max_lease_ttl(&self) -> Duration;
}
