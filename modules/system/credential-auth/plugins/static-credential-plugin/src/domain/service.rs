//! Service implementation for the static credential validator plugin.

use std::collections::HashMap;

use credential_auth_sdk::{LogicalFailure, ValidatedIdentity, ValidationOutcome};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{StaticCredentialPluginConfig, UserEntry};

/// Reason given for every refused credential, so callers cannot probe which
/// usernames exist.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Static credential validator.
pub struct Service {
    unavailable: bool,
    users: HashMap<String, UserEntry>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// Later entries win when a username is listed twice.
    #[must_use]
    pub fn from_config(cfg: &StaticCredentialPluginConfig) -> Self {
        let users = cfg
            .users
            .iter()
            .map(|u| (u.username.clone(), u.clone()))
            .collect();

        Self {
            unavailable: cfg.unavailable,
            users,
        }
    }

    /// Whether the plugin simulates an unreachable provider.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    /// Check a credential against the configured users.
    #[must_use]
    pub fn check(&self, username: &str, password: &SecretString) -> ValidationOutcome {
        let Some(user) = self.users.get(username) else {
            return rejected();
        };
        if user.password.expose_secret() != password.expose_secret() {
            return rejected();
        }

        ValidationOutcome::Authenticated(ValidatedIdentity {
            policies: user.policies.clone(),
            groups: user.groups.clone(),
            warnings: Vec::new(),
        })
    }
}

fn rejected() -> ValidationOutcome {
    ValidationOutcome::Rejected(LogicalFailure::new(INVALID_CREDENTIALS))
}
