//! Configuration for credential auth.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use credential_auth_sdk::LeaseConfig;
use credential_auth_sdk::models::serde_duration;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

/// Environment prefix; nested keys are separated by `__`,
/// e.g. `CREDENTIAL_AUTH__LEASE__TTL=1h`.
pub const ENV_PREFIX: &str = "CREDENTIAL_AUTH__";

const DEFAULT_SYSTEM_TTL: Duration = Duration::from_secs(768 * 60 * 60);

/// Module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialAuthConfig {
    /// Lease settings for issued grants. Login and renewal fail with
    /// "backend not configured" while this is absent.
    pub lease: Option<LeaseConfig>,

    /// Deployment-wide lease bounds.
    pub system: SystemCeilingConfig,
}

/// Deployment-wide lease bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemCeilingConfig {
    /// TTL applied when the backend configures none.
    #[serde(with = "serde_duration")]
    pub default_lease_ttl: Duration,

    /// TTL no grant may exceed.
    #[serde(with = "serde_duration")]
    pub max_lease_ttl: Duration,
}

impl Default for SystemCeilingConfig {
    fn default() -> Self {
        Self {
            default_lease_ttl: DEFAULT_SYSTEM_TTL,
            max_lease_ttl: DEFAULT_SYSTEM_TTL,
        }
    }
}

impl CredentialAuthConfig {
    /// Load configuration from a YAML file, overridden by `CREDENTIAL_AUTH__*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Fails when the file or an override cannot be parsed into the config.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("invalid credential_auth config at {}", path.display()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // Env overrides are process-wide; serialize with `env_overrides_file`.
    fn load_isolated(path: &Path) -> anyhow::Result<CredentialAuthConfig> {
        temp_env::with_var_unset("CREDENTIAL_AUTH__LEASE__TTL", || {
            CredentialAuthConfig::load(path)
        })
    }

    #[test]
    fn defaults_leave_backend_unconfigured() {
        let cfg = CredentialAuthConfig::default();
        assert!(cfg.lease.is_none());
        assert_eq!(cfg.system.default_lease_ttl, 768 * HOUR);
        assert_eq!(cfg.system.max_lease_ttl, 768 * HOUR);
    }

    #[test]
    fn load_reads_yaml_file() {
        let file = write_yaml(
            "lease:\n  ttl: 1h\n  max_ttl: 2h\nsystem:\n  default_lease_ttl: 24h\n  max_lease_ttl: 48h\n",
        );

        let cfg = load_isolated(file.path()).unwrap();

        assert_eq!(cfg.lease, Some(LeaseConfig::new(HOUR, 2 * HOUR)));
        assert_eq!(cfg.system.default_lease_ttl, 24 * HOUR);
        assert_eq!(cfg.system.max_lease_ttl, 48 * HOUR);
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_isolated(&dir.path().join("absent.yaml")).unwrap();
        assert!(cfg.lease.is_none());
        assert_eq!(cfg.system, SystemCeilingConfig::default());
    }

    #[test]
    fn env_overrides_file() {
        let file = write_yaml("lease:\n  ttl: 1h\n");

        let cfg = temp_env::with_var("CREDENTIAL_AUTH__LEASE__TTL", Some("45m"), || {
            CredentialAuthConfig::load(file.path()).unwrap()
        });

        assert_eq!(
            cfg.lease,
            Some(LeaseConfig::new(Duration::from_secs(45 * 60), Duration::ZERO))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_yaml("lease:\n  ttl: 1h\n  period: 2h\n");
        assert!(load_isolated(file.path()).is_err());
    }
}
