//! Domain service for credential auth: grant issuance and renewal.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use credential_auth_sdk::{
    Alias, CredentialValidatorPluginClient, Grant, GrantInternalData, GrantResponse, LeaseConfig,
    LeaseConfigSource, LeaseOptions, LoginOutcome, LoginRequest, RenewRequest, RenewalOutcome,
    SystemCeiling, ValidatedIdentity, ValidationOutcome, metadata_keys,
};
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::lease;
use super::policies;

/// Credential auth service.
///
/// Every login and every renewal goes to the identity provider; nothing is
/// cached between requests.
pub struct Service {
    validator: Arc<dyn CredentialValidatorPluginClient>,
    lease_source: Arc<dyn LeaseConfigSource>,
    ceiling: Arc<dyn SystemCeiling>,
}

impl Service {
    #[must_use]
    pub fn new(
        validator: Arc<dyn CredentialValidatorPluginClient>,
        lease_source: Arc<dyn LeaseConfigSource>,
        ceiling: Arc<dyn SystemCeiling>,
    ) -> Self {
        Self {
            validator,
            lease_source,
            ceiling,
        }
    }

    /// Resolve the identity alias of a username without a credential check.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the username is empty
    pub fn alias_lookahead(username: &str) -> Result<Alias, DomainError> {
        require_username(username)?;
        Ok(Alias::new(username))
    }

    /// Validate a credential and issue a grant.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the username is empty
    /// - `NotConfigured` if no lease configuration is stored
    /// - identity provider failures
    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, DomainError> {
        let LoginRequest { username, password } = request;
        require_username(&username)?;

        let identity = match self.validator.validate(&username, &password).await? {
            ValidationOutcome::Authenticated(identity) => identity,
            ValidationOutcome::Rejected(failure) => {
                info!(reason = %failure.reason, "Credential rejected by identity provider");
                return Ok(LoginOutcome::Rejected(failure));
            }
        };
        let ValidatedIdentity {
            policies,
            groups,
            mut warnings,
        } = identity;
        let policies = policies::normalize(policies);

        let cfg = self.load_lease_config().await?;
        let capped = lease::effective_ttl(cfg.ttl, &cfg, self.ceiling.as_ref());
        if let Some(warning) = capped.warning {
            warn!(%warning, "Grant TTL capped");
            warnings.push(warning);
        }

        let mut metadata = BTreeMap::new();
        metadata.insert(metadata_keys::USERNAME.to_owned(), username.clone());
        metadata.insert(metadata_keys::POLICIES.to_owned(), policies.join(","));

        let grant = Grant {
            policies,
            metadata,
            internal_data: GrantInternalData { password },
            display_name: username.clone(),
            lease: LeaseOptions {
                ttl: capped.ttl,
                renewable: true,
                issued_at: Utc::now(),
            },
            alias: Alias::new(username),
            group_aliases: policies::group_aliases(&groups),
        };

        info!(
            policies = %grant.policies.join(","),
            group_aliases = grant.group_aliases.len(),
            ttl = %humantime::format_duration(grant.lease.ttl),
            "Issued grant"
        );

        Ok(LoginOutcome::Granted(GrantResponse { grant, warnings }))
    }

    /// Re-validate the credential behind a grant and extend its lease.
    ///
    /// The grant is consumed; a refused renewal hands nothing back, so the
    /// caller's stored copy is never partially extended.
    ///
    /// # Errors
    ///
    /// - `PoliciesChanged` if the provider now grants a different policy set
    /// - `PastMaxTtl` if the grant has outlived its maximum lifetime
    /// - `NotConfigured` if no lease configuration is stored
    /// - `Internal` if the grant carries no username
    /// - identity provider failures
    #[tracing::instrument(skip_all, fields(username))]
    pub async fn renew_login(&self, request: RenewRequest) -> Result<RenewalOutcome, DomainError> {
        let RenewRequest {
            mut grant,
            increment,
        } = request;
        let username = grant
            .username()
            .ok_or_else(|| DomainError::internal("grant metadata has no username"))?
            .to_owned();
        tracing::Span::current().record("username", username.as_str());

        let outcome = self
            .validator
            .validate(&username, &grant.internal_data.password)
            .await?;

        // Zero policies: hand back whatever the provider said, unclassified.
        let identity = match outcome {
            ValidationOutcome::Authenticated(identity) if !identity.policies.is_empty() => identity,
            other => {
                debug!("Re-validation returned no policies; not renewing");
                return Ok(RenewalOutcome::NotRenewed(other));
            }
        };

        if !policies::equivalent(&identity.policies, &grant.policies) {
            warn!(
                previous = %grant.policies.join(","),
                current = %policies::normalize(identity.policies).join(","),
                "Policies changed since login; refusing renewal"
            );
            return Err(DomainError::PoliciesChanged);
        }

        let cfg = self.load_lease_config().await?;
        let requested = increment.filter(|d| !d.is_zero()).unwrap_or(cfg.ttl);
        let capped = lease::effective_ttl(requested, &cfg, self.ceiling.as_ref());
        let remaining =
            lease::remaining_lifetime(grant.lease.issued_at, &cfg, self.ceiling.as_ref(), Utc::now())?;

        let mut warnings = identity.warnings;
        if let Some(warning) = capped.warning {
            warn!(%warning, "Renewed grant TTL capped");
            warnings.push(warning);
        }

        grant.lease.ttl = capped.ttl.min(remaining);
        grant.group_aliases = policies::group_aliases(&identity.groups);

        info!(
            ttl = %humantime::format_duration(grant.lease.ttl),
            group_aliases = grant.group_aliases.len(),
            "Renewed grant"
        );

        Ok(RenewalOutcome::Renewed(GrantResponse { grant, warnings }))
    }

    async fn load_lease_config(&self) -> Result<LeaseConfig, DomainError> {
        self.lease_source
            .lease_config()
            .await?
            .ok_or(DomainError::NotConfigured)
    }
}

fn require_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::MissingField { field: "username" });
    }
    Ok(())
}
