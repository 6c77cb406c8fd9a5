use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::url::DEFAULT_BASE_URL;

/// Sent when no user agent is configured; the API rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("opensecrets-rs/", env!("CARGO_PKG_VERSION"));

/// Client configuration.
///
/// Loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. Environment variables with `OPENSECRETS_` prefix
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API key issued by OpenSecrets. Required; there is no default.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `User-Agent` header. Empty falls back to [`DEFAULT_USER_AGENT`].
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on a whole call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults plus the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// The layered provider stack, exposed so callers can merge extra sources.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed("OPENSECRETS_"))
    }

    /// Load from defaults and the environment.
    ///
    /// # Errors
    /// [`ConfigError::Load`] if a source holds a value of the wrong type,
    /// [`ConfigError::MissingApiKey`] if no key is configured.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
