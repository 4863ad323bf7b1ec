//! Issuers
//!
//! Banks (or other parties) a customer can pick for methods such as iDEAL.

use serde::{Deserialize, Serialize};

/// An issuer of a payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub id: String,
    pub name: String,
    /// Id of the payment method this issuer belongs to
    pub method: String,
}
