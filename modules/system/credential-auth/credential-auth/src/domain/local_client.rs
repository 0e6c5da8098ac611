//! Local (in-process) client for credential auth.

use std::sync::Arc;

use async_trait::async_trait;
use credential_auth_sdk::{
    Alias, CredentialAuthClient, CredentialAuthError, LoginOutcome, LoginRequest, RenewRequest,
    RenewalOutcome,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to the request-routing layer by [`CredentialAuthModule`](crate::CredentialAuthModule).
pub struct CredentialAuthLocalClient {
    svc: Arc<Service>,
}

impl CredentialAuthLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> CredentialAuthError {
    match &e {
        DomainError::MissingField { .. } | DomainError::PoliciesChanged | DomainError::PastMaxTtl => {
            tracing::info!(operation = op, error = %e, "credential_auth request refused");
        }
        _ => tracing::error!(operation = op, error = ?e, "credential_auth call failed"),
    }
    e.into()
}

#[async_trait]
impl CredentialAuthClient for CredentialAuthLocalClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, CredentialAuthError> {
        self.svc
            .login(request)
            .await
            .map_err(|e| log_and_convert("login", e))
    }

    async fn alias_lookahead(&self, username: &str) -> Result<Alias, CredentialAuthError> {
        Service::alias_lookahead(username).map_err(|e| log_and_convert("alias_lookahead", e))
    }

    async fn renew_login(
        &self,
        request: RenewRequest,
    ) -> Result<RenewalOutcome, CredentialAuthError> {
        self.svc
            .renew_login(request)
            .await
            .map_err(|e| log_and_convert("renew_login", e))
    }
}
