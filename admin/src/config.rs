use ::config::{Config, File, FileFormat};
use client::ClientConfig;
use protocol::Environment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Prefix of environment variables overriding file settings, e.g. `TOOLS_ENVIRONMENT`
pub const ENV_PREFIX: &str = "TOOLS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// development targets `http://localhost/tools/`, production `<host>/tools/`
    #[serde(default)]
    pub environment: Environment,

    /// Deployed host the production base path is resolved against
    #[serde(default)]
    pub host: Option<String>,

    /// Full base address, bypassing environment selection
    #[serde(default)]
    pub base_url: Option<String>,

    /// JSON document holding the persisted session
    #[serde(default = "default_session_file")]
    pub session_file: String,

    /// 0 disables the timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log directory for file-based logging; stderr when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_session_file() -> String {
    ".tools-admin/storage.json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    "tools-admin.log".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            host: None,
            base_url: None,
            session_file: default_session_file(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
            log_dir: None,
            log_file: default_log_file(),
        }
    }
}

impl AdminConfig {
    /// TOML file (optional) overlaid with `TOOLS_*` environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn client_config(&self) -> client::Result<ClientConfig> {
        let config = match &self.base_url {
            Some(base_url) => ClientConfig::from_base_url(base_url)?,
            None => ClientConfig::for_environment(self.environment, self.host.as_deref())?,
        };
        Ok(config.with_request_timeout(self.request_timeout()))
    }
}
