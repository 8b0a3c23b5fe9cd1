use crate::error::{ClientError, Result};
use protocol::Environment;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings fixed when the client is built
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// `None` leaves requests pending until the transport gives up
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Base address of `environment`. Production needs the deployed host,
    /// since `/tools/` is relative to it.
    pub fn for_environment(environment: Environment, host: Option<&str>) -> Result<Self> {
        let address = environment.base_address(host);
        if address.starts_with('/') {
            return Err(ClientError::InvalidUrl(format!(
                "{environment} base path {address} needs a host"
            )));
        }
        Self::from_base_url(&address)
    }

    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} cannot be used as a base address"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
