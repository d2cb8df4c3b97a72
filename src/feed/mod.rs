//! Fetching and validating the news document.
//!
//! - [`endpoint`] - Resolves where the news endpoint lives for a given page
//! - [`fetcher`] - Single HTTP GET with size-limited body read and JSON parsing
//! - [`validator`] - Turns the parsed JSON into a [`NewsPayload`]
//!
//! # Example
//!
//! ```ignore
//! use newsboard::feed::{resolve_endpoint, validate, EndpointConfig, Fetcher};
//!
//! let endpoint = resolve_endpoint(&page_url, &EndpointConfig::default())?;
//! let fetcher = Fetcher::new(reqwest::Client::new(), endpoint);
//! let payload = validate(fetcher.fetch_json().await?)?;
//! ```

mod endpoint;
mod fetcher;
mod types;
mod validator;

pub use endpoint::{
    resolve_endpoint, EndpointConfig, EndpointError, DEFAULT_DEV_ADDRESS, DEFAULT_PATH,
};
pub use fetcher::{FetchError, Fetcher};
pub use types::{Article, Category, NewsPayload};
pub use validator::{validate, ValidationError};

use async_trait::async_trait;
use serde_json::Value;

/// Anything that can produce the raw news document.
///
/// [`Fetcher`] is the HTTP implementation; tests substitute canned or delayed
/// sources to drive the presenter without a network.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Address shown to the user as a diagnostics link when loading fails.
    fn endpoint(&self) -> &str;

    /// Produce the parsed (but not yet validated) document.
    async fn fetch(&self) -> Result<Value, FetchError>;
}
