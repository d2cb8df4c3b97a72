use crate::util::is_local_host;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Default backend address used while developing against a local page.
pub const DEFAULT_DEV_ADDRESS: &str = "http://127.0.0.1:8000/news";
/// Default path of the news endpoint relative to the page.
pub const DEFAULT_PATH: &str = "/news";

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Invalid endpoint address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },
}

/// Where the news endpoint lives.
///
/// Loaded from the `[endpoint]` table of the config file; every key is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Absolute address that bypasses host-based resolution entirely.
    pub base_address: Option<String>,
    /// Address used when the page itself is served from a local host.
    pub dev_address: String,
    /// Path joined onto the page URL otherwise.
    pub path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_address: None,
            dev_address: DEFAULT_DEV_ADDRESS.to_string(),
            path: DEFAULT_PATH.to_string(),
        }
    }
}

/// Resolves the news endpoint for a page served from `page_url`.
///
/// Precedence:
/// 1. `config.base_address` when set
/// 2. `config.dev_address` when the page host is local (`localhost`, loopback IPs)
/// 3. `config.path` joined onto `page_url`
///
/// # Errors
///
/// Returns [`EndpointError::InvalidAddress`] if the chosen address does not
/// parse as a URL.
pub fn resolve_endpoint(page_url: &Url, config: &EndpointConfig) -> Result<Url, EndpointError> {
    if let Some(base) = config.base_address.as_deref() {
        tracing::debug!(endpoint = %base, "Using injected base address");
        return parse_address(base);
    }

    if page_url.host_str().is_some_and(is_local_host) {
        tracing::debug!(
            page = %page_url,
            endpoint = %config.dev_address,
            "Local page, using development address"
        );
        return parse_address(&config.dev_address);
    }

    page_url
        .join(&config.path)
        .map_err(|source| EndpointError::InvalidAddress {
            address: config.path.clone(),
            source,
        })
}

fn parse_address(address: &str) -> Result<Url, EndpointError> {
    Url::parse(address).map_err(|source| EndpointError::InvalidAddress {
        address: address.to_owned(),
        source,
    })
}
