//! HTTP transport for Mollie REST API calls

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(char::is_control, "")
}

/// Capability to perform a single authenticated HTTP call.
///
/// Implementations return the response body as text whatever the HTTP status
/// is: the API reports failures inside the body, and interpreting it is the
/// client's job. Only failures to complete the exchange are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform_http_call(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<String>,
    ) -> Result<String>;
}

/// reqwest-backed [`Transport`]
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a transport whose requests fail after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("mollie-rs/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_http_call(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<String>,
    ) -> Result<String> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(api_key)
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(body) = body {
            if method == Method::POST {
                request = request
                    .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                    .body(body);
            }
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            // Only the sanitized/truncated body is logged
            tracing::warn!("API returned {} - {}", status, sanitize_for_log(&body));
        }

        Ok(body)
    }
}
