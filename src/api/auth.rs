//! API key handling
//!
//! Mollie authenticates every request with a bearer token. Keys are issued per
//! website profile and always carry their mode as a prefix.

use crate::error::{Error, Result};
use std::fmt;

/// Prefixes a key may start with, one per mode.
const KEY_PREFIXES: &[&str] = &["live_", "test_"];

/// A validated Mollie API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap an API key.
    pub fn parse(key: &str) -> Result<Self> {
        if validate_api_key(key) {
            Ok(Self(key.to_string()))
        } else {
            Err(Error::InvalidApiKey(key.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for keys created for the sandbox.
    pub fn is_test(&self) -> bool {
        self.0.starts_with("test_")
    }
}

// Keep the secret part out of debug output
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_test() { "test" } else { "live" };
        write!(f, "ApiKey({mode}_***)")
    }
}

/// Validate an API key format
/// Keys are `live_` or `test_` followed by one or more ASCII letters, digits or underscores
fn validate_api_key(key: &str) -> bool {
    let Some(rest) = KEY_PREFIXES.iter().find_map(|p| key.strip_prefix(p)) else {
        return false;
    };

    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_live_and_test_keys() {
        assert!(ApiKey::parse("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM").is_ok());
        assert!(ApiKey::parse("live_abc_123").is_ok());
    }

    #[test]
    fn test_rejects_malformed_keys() {
        for key in ["invalid", "test_", "TEST_abc", "test-abc", "test_ab c", "xtest_abc", ""] {
            let err = ApiKey::parse(key).unwrap_err();
            assert!(matches!(err, Error::InvalidApiKey(ref k) if k == key), "{key}");
        }
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let key = ApiKey::parse("live_secretvalue").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("secretvalue"));
        assert!(!key.is_test());
    }
}
