//! Lease configuration and system ceiling backed by loaded configuration.

use std::time::Duration;

use async_trait::async_trait;
use credential_auth_sdk::{CredentialAuthError, LeaseConfig, LeaseConfigSource, SystemCeiling};

use crate::config::SystemCeilingConfig;

/// Lease configuration fixed at start-up.
#[derive(Debug, Clone, Default)]
pub struct ConfigLeaseSource {
    lease: Option<LeaseConfig>,
}

impl ConfigLeaseSource {
    #[must_use]
    pub fn new(lease: Option<LeaseConfig>) -> Self {
        Self { lease }
    }
}

#[async_trait]
impl LeaseConfigSource for ConfigLeaseSource {
    async fn lease_config(&self) -> Result<Option<LeaseConfig>, CredentialAuthError> {
        Ok(self.lease)
    }
}

/// System ceiling with fixed bounds.
#[derive(Debug, Clone, Copy)]
pub struct StaticSystemCeiling {
    default_lease_ttl: Duration,
    max_lease_ttl: Duration,
}

impl StaticSystemCeiling {
    #[must_use]
    pub fn new(default_lease_ttl: Duration, max_lease_ttl: Duration) -> Self {
        Self {
            default_lease_ttl,
            max_lease_ttl,
        }
    }
}

impl From<SystemCeilingConfig> for StaticSystemCeiling {
    fn from(cfg: SystemCeilingConfig) -> Self {
        Self::new(cfg.default_lease_ttl, cfg.max_lease_ttl)
    }
}

impl SystemCeiling for StaticSystemCeiling {
    fn default_lease_ttl(&self) -> Duration {
        self.default_lease_ttl
    }

    fn max_lease_ttl(&self) -> Duration {
        self.max_lease_ttl
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_source_returns_none() {
        let source = ConfigLeaseSource::default();
        assert!(source.lease_config().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn configured_source_returns_lease() {
        let lease = LeaseConfig::new(Duration::from_secs(60), Duration::from_secs(120));
        let source = ConfigLeaseSource::new(Some(lease));
        assert_eq!(source.lease_config().await.unwrap(), Some(lease));
    }

    #[test]
    fn ceiling_from_config() {
        let ceiling = StaticSystemCeiling::from(SystemCeilingConfig::default());
        assert_eq!(ceiling.default_lease_ttl(), Duration::from_secs(768 * 3600));
        assert_eq!(ceiling.max_lease_ttl(), Duration::from_secs(768 * 3600));
    }
}
