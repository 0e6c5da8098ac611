//! Client implementation for the static credential validator plugin.
//!
//! Implements `CredentialValidatorPluginClient` using the domain service.

use async_trait::async_trait;
use credential_auth_sdk::{CredentialAuthError, CredentialValidatorPluginClient, ValidationOutcome};
use secrecy::SecretString;

use super::service::Service;

#[async_trait]
impl CredentialValidatorPluginClient for Service {
    async fn validate(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<ValidationOutcome, CredentialAuthError> {
        if self.is_unavailable() {
            tracing::warn!(username, "Static credential plugin configured as unavailable");
            return Err(CredentialAuthError::ProviderUnavailable(
                "static credential plugin is disabled".to_owned(),
            ));
        }
        let outcome = self.check(username, password);
        tracing::debug!(
            username,
            accepted = matches!(outcome, ValidationOutcome::Authenticated(_)),
            "Checked credential"
        );
        Ok(outcome)
    }
}
