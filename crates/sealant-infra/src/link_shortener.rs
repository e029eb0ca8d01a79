//! HTTP link shortener (TinyURL create API)

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use sealant_domain::LinkShortener;
use sealant_types::{Result, ShareError};

/// Public TinyURL create endpoint
pub const DEFAULT_SHORTENER_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Check that a string is an absolute http(s) URL
pub fn validate_share_url(url_str: &str) -> Result<Url> {
    let invalid = |reason: String| ShareError::InvalidUrl {
        url: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()).into());
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme)).into()),
    }
}

/// Shortener that calls `GET <endpoint>?url=<long>` and reads the short URL from the body
pub struct TinyUrlShortener {
    client: Client,
    endpoint: String,
}

impl TinyUrlShortener {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_SHORTENER_ENDPOINT)
    }

    /// Use a different create endpoint (self-hosted or test server)
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        validate_share_url(endpoint)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ShareError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl LinkShortener for TinyUrlShortener {
    fn shorten(&self, long_url: &str) -> Result<String> {
        validate_share_url(long_url)?;
        tracing::debug!(endpoint = %self.endpoint, "requesting short link");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", long_url)])
            .send()
            .map_err(|e| ShareError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "link shortener rejected request");
            return Err(ShareError::Status(status.as_u16()).into());
        }

        let body = response
            .text()
            .map_err(|e| ShareError::Request(e.to_string()))?;
        let short = body.trim();

        // The service answers with the bare short URL; anything else is a failure
        if validate_share_url(short).is_err() {
            return Err(ShareError::EmptyResponse.into());
        }

        tracing::info!(short_url = short, "created short link");
        Ok(short.to_string())
    }
}
