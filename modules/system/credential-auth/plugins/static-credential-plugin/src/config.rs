//! Configuration for the static credential validator plugin.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticCredentialPluginConfig {
    /// Fail every call as if the provider were unreachable.
    pub unavailable: bool,

    /// Known users.
    pub users: Vec<UserEntry>,
}

/// A user the plugin accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
    #[serde(default)]
    pub policies: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl UserEntry {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<SecretString>,
        policies: Vec<String>,
        groups: Vec<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            policies,
            groups,
        }
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
