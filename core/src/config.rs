//! Client configuration, loaded with figment.
//!
//! Sources (highest priority wins):
//! 1. Environment variables (`NETMGMT_*` prefix, `__` separates nesting,
//!    e.g. `NETMGMT_BASE_URL`, `NETMGMT_REQUEST_TIMEOUT_SECS`)
//! 2. An optional TOML file passed to [`ClientConfig::load_from`]
//! 3. Built-in defaults

use std::collections::BTreeMap;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "https://localhost".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("netmgmt/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Controller root, e.g. `https://10.0.0.5`. A trailing `/` is ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Headers attached to every request. Obtaining their values (tokens
    /// and the like) is up to the caller.
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,

    /// Applied by [`ReqwestTransport`](crate::ReqwestTransport) only.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_headers: BTreeMap::new(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Load from defaults and `NETMGMT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract::<Self>()?.validate()
    }

    /// Load from defaults, a TOML file, then `NETMGMT_*` environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract::<Self>()?
            .validate()
    }

    /// The provider chain used by [`load`](Self::load).
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed("NETMGMT_").split("__")
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(self)
    }
}
