use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base address used while developing against a local backend.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost/tools/";

/// Base path of a production deployment, relative to the deployed host.
pub const PRODUCTION_BASE_PATH: &str = "/tools/";

/// Build environment the client targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local backend on `http://localhost/tools/`
    #[default]
    #[serde(alias = "dev")]
    Development,
    /// Deployed backend under `/tools/` of the configured host
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    /// Base address for this environment.
    ///
    /// Production resolves `/tools/` against `host`; development ignores it.
    pub fn base_address(self, host: Option<&str>) -> String {
        match self {
            Environment::Development => DEVELOPMENT_BASE_URL.to_string(),
            Environment::Production => match host {
                Some(host) => format!("{}{}", host.trim_end_matches('/'), PRODUCTION_BASE_PATH),
                None => PRODUCTION_BASE_PATH.to_string(),
            },
        }
    }
}

impl FromStr for Environment {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(ProtocolError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}
