//! Credential auth module wiring.

use std::sync::{Arc, OnceLock};

use credential_auth_sdk::{CredentialAuthClient, CredentialValidatorPluginClient};
use tracing::{info, warn};

use crate::config::CredentialAuthConfig;
use crate::domain::{CredentialAuthLocalClient, Service};
use crate::infra::{ConfigLeaseSource, StaticSystemCeiling};

/// Credential auth module.
///
/// Builds the service from configuration and an identity provider client,
/// and hands out the public client for the request-routing layer.
#[derive(Default)]
pub struct CredentialAuthModule {
    service: OnceLock<Arc<Service>>,
}

impl CredentialAuthModule {
    /// Initialize the module.
    ///
    /// # Errors
    ///
    /// Fails if the module was already initialized.
    #[tracing::instrument(skip_all)]
    pub fn init(
        &self,
        cfg: &CredentialAuthConfig,
        validator: Arc<dyn CredentialValidatorPluginClient>,
    ) -> anyhow::Result<Arc<dyn CredentialAuthClient>> {
        match &cfg.lease {
            Some(lease) => info!(
                ttl = %humantime::format_duration(lease.ttl),
                max_ttl = %humantime::format_duration(lease.max_ttl),
                "Initializing credential_auth"
            ),
            None => warn!("Initializing credential_auth without lease configuration; logins will fail"),
        }

        let svc = Arc::new(Service::new(
            validator,
            Arc::new(ConfigLeaseSource::new(cfg.lease)),
            Arc::new(StaticSystemCeiling::from(cfg.system)),
        ));

        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(CredentialAuthLocalClient::new(svc)))
    }
}
