//! Payment methods

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const IDEAL: &str = "ideal";
pub const CREDITCARD: &str = "creditcard";
pub const MISTERCASH: &str = "mistercash";
pub const SOFORT: &str = "sofort";
pub const BANKTRANSFER: &str = "banktransfer";
pub const DIRECTDEBIT: &str = "directdebit";
pub const PAYPAL: &str = "paypal";
pub const BITCOIN: &str = "bitcoin";
pub const PAYSAFECARD: &str = "paysafecard";
pub const BELFIUS: &str = "belfius";
pub const KBC: &str = "kbc";
pub const PODIUMCADEAUKAART: &str = "podiumcadeaukaart";

/// Amount range a method supports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodAmount {
    #[serde(default, serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize")]
    pub minimum: Option<Decimal>,
    #[serde(default, serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize")]
    pub maximum: Option<Decimal>,
}

/// Method logo in two resolutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodImage {
    #[serde(default)]
    pub normal: Option<String>,
    /// Double resolution variant
    #[serde(default)]
    pub bigger: Option<String>,
}

/// A payment method enabled on the website profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    /// Human readable name, localized when a locale was requested
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<MethodAmount>,
    #[serde(default)]
    pub image: Option<MethodImage>,
}

impl PaymentMethod {
    pub fn minimum_amount(&self) -> Option<Decimal> {
        self.amount.as_ref()?.minimum
    }

    pub fn maximum_amount(&self) -> Option<Decimal> {
        self.amount.as_ref()?.maximum
    }
}
