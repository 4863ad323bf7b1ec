//! Error types
//!
//! Every fallible operation in this crate returns [`Result`]. The variants map
//! onto four failure classes:
//!
//! - **Configuration** ([`Error::InvalidApiKey`], [`Error::MissingApiKey`],
//!   [`Error::InvalidEndpoint`]): raised before any network activity
//! - **Transport** ([`Error::Transport`]): the HTTP call itself failed
//! - **Decode** ([`Error::Decode`]): the response was not a JSON object, or did
//!   not have the shape of the requested entity
//! - **API** ([`Error::Api`]): the API answered with an `"error"` envelope
//!
//! None of these are retried by the client.

use serde::Deserialize;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Mollie client.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key does not look like `live_…` or `test_…`.
    #[error("Invalid api key: \"{0}\". An API key must start with \"test_\" or \"live_\".")]
    InvalidApiKey(String),

    /// An operation was attempted before an API key was set.
    #[error("You have not set an api key. Please use set_api_key() to set the API key.")]
    MissingApiKey,

    /// The API endpoint override is not an absolute http(s) URL.
    #[error("Invalid api endpoint: \"{0}\"")]
    InvalidEndpoint(String),

    /// Network or connection failure while talking to the API.
    #[error("Unable to communicate with Mollie: {0}")]
    Transport(#[source] anyhow::Error),

    /// The request body could not be encoded as JSON.
    #[error("Unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not a JSON object, or not the expected entity.
    #[error("Unable to decode Mollie response: \"{body}\"")]
    Decode {
        body: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The API reported an error through its error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// True for errors raised before any request was sent.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey(_) | Self::MissingApiKey | Self::InvalidEndpoint(_)
        )
    }

    /// The API-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn decode(body: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::Decode {
            body: body.into(),
            source,
        }
    }
}

/// Contents of an `{"error": {...}}` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("API Error ({kind}): {message}.")]
pub struct ApiError {
    /// Error class reported by the API, e.g. `request`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    /// Request field the error refers to, when the API names one.
    #[serde(default)]
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_has_trailing_period() {
        let err = Error::from(ApiError {
            kind: "request".to_string(),
            message: "Unauthorized request".to_string(),
            field: None,
        });
        assert_eq!(err.to_string(), "API Error (request): Unauthorized request.");
        assert!(!err.is_configuration());
        assert_eq!(err.api_error().unwrap().kind, "request");
    }

    #[test]
    fn test_api_error_envelope_parses_field() {
        let err: ApiError = serde_json::from_str(
            r#"{"type":"request","message":"The amount is lower than minimum","field":"amount"}"#,
        )
        .unwrap();
        assert_eq!(err.field.as_deref(), Some("amount"));
    }

    #[test]
    fn test_invalid_key_cites_key_verbatim() {
        let err = Error::InvalidApiKey("invalid".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid api key: \"invalid\". An API key must start with \"test_\" or \"live_\"."
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_decode_error_carries_body() {
        let err = Error::decode("", None);
        assert_eq!(err.to_string(), "Unable to decode Mollie response: \"\"");
    }
}
