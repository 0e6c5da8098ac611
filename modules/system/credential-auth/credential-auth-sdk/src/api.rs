//! Public API trait for credential auth.
//!
//! The request-routing layer parses transport fields into the typed requests
//! below and calls this trait; it owns all wire encoding.

use async_trait::async_trait;

use crate::error::CredentialAuthError;
use crate::models::{Alias, LoginOutcome, LoginRequest, RenewRequest, RenewalOutcome};

/// Short help for the login endpoint.
pub const LOGIN_HELP_SYNOPSIS: &str = "Log in with a username and password.";

/// Long help for the login endpoint.
pub const LOGIN_HELP_DESCRIPTION: &str =
    "This endpoint authenticates using a username and password.";

/// Public API trait for credential auth.
///
/// ```ignore
/// let auth: Arc<dyn CredentialAuthClient> = ...;
///
/// let alias = auth.alias_lookahead("alice").await?;
/// let outcome = auth.login(LoginRequest::new("alice", password)).await?;
/// ```
#[async_trait]
pub trait CredentialAuthClient: Send + Sync {
    /// Validate the credential and issue a renewable grant.
    ///
    /// # Errors
    ///
    /// - `Validation` if the username is empty
    /// - `NotConfigured` if no lease configuration exists
    /// - `ProviderUnavailable` / `Internal` if the identity provider failed
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, CredentialAuthError>;

    /// Resolve the identity alias for a username without checking any
    /// credential.
    ///
    /// # Errors
    ///
    /// - `Validation` if the username is empty
    async fn alias_lookahead(&self, username: &str) -> Result<Alias, CredentialAuthError>;

    /// Re-validate the credential behind a grant and extend its lease.
    ///
    /// # Errors
    ///
    /// - `PoliciesChanged` if the granted policies differ from the grant's
    /// - `PastMaxTtl` if the grant has outlived its maximum lifetime
    /// - `NotConfigured` if no lease configuration exists
    /// - `ProviderUnavailable` / `Internal` if the identity provider failed
    async fn renew_login(
        &self,
        request: RenewRequest,
    ) -> Result<RenewalOutcome, CredentialAuthError>;
}
