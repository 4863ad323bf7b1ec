//! Mollie Client
//!
//! Main client for the Mollie API, combining the API key, endpoint and HTTP
//! transport. Resource accessors borrow the client.

use super::auth::ApiKey;
use super::http::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::objects::Payment;
use crate::resource::{Issuers, Methods, PaymentRefunds, Payments};
use reqwest::Method;
use std::time::Duration;
use url::Url;

/// Endpoint of the remote API
pub const API_ENDPOINT: &str = "https://api.mollie.nl";

/// Version of the remote API, part of every request path
pub const API_VERSION: &str = "v1";

/// Main Mollie client
pub struct MollieClient {
    transport: Box<dyn Transport>,
    api_endpoint: String,
    api_key: Option<ApiKey>,
}

impl MollieClient {
    /// Create a client talking to the live API over HTTPS
    pub fn new() -> Result<Self> {
        let transport = HttpTransport::new().map_err(Error::Transport)?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            api_endpoint: API_ENDPOINT.to_string(),
            api_key: None,
        }
    }

    /// Create a client from a loaded [`Config`]
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = match config.timeout_secs {
            Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs)),
            None => HttpTransport::new(),
        }
        .map_err(Error::Transport)?;

        let mut client = Self::with_transport(transport);
        if let Some(endpoint) = config.api_endpoint.as_deref() {
            client.set_api_endpoint(endpoint)?;
        }
        if let Some(key) = config.api_key.as_deref() {
            client.set_api_key(key)?;
        }

        Ok(client)
    }

    /// Set the API key used for every subsequent request
    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        let key = ApiKey::parse(key)?;
        tracing::debug!("Using {:?}", key);
        self.api_key = Some(key);
        Ok(())
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Point the client at another API host, e.g. a local mock server
    pub fn set_api_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let parsed =
            Url::parse(endpoint).map_err(|_| Error::InvalidEndpoint(endpoint.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }

        self.api_endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(())
    }

    // =========================================================================
    // Resources
    // =========================================================================

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub fn methods(&self) -> Methods<'_> {
        Methods::new(self)
    }

    pub fn issuers(&self) -> Issuers<'_> {
        Issuers::new(self)
    }

    /// Refunds of a single payment
    pub fn payment_refunds(&self, payment: &Payment) -> PaymentRefunds<'_> {
        PaymentRefunds::new(self, &payment.id)
    }

    // =========================================================================
    // HTTP
    // =========================================================================

    /// Build the full URL for an API path such as `payments/tr_123`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.api_endpoint, API_VERSION, path)
    }

    /// Perform a raw API call and return the response body.
    ///
    /// Fails with [`Error::MissingApiKey`] without touching the network when no
    /// key has been set.
    pub async fn perform_http_call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(Error::MissingApiKey);
        };

        let url = self.api_url(path);
        self.transport
            .perform_http_call(method, &url, api_key.as_str(), body)
            .await
            .map_err(Error::Transport)
    }
}
