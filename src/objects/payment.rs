//! Payments

use super::method::CREDITCARD;
use super::{null_as_default, parse_datetime};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Status of a payment as reported by the API
///
/// Statuses this client does not know about are kept verbatim in
/// [`PaymentStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Just created, nothing has happened yet
    #[default]
    Open,
    /// Started, no final confirmation yet
    Pending,
    /// Cancelled by the customer
    Cancelled,
    /// Expired due to inaction of the customer
    Expired,
    Paid,
    /// Paid and transferred to the merchant's bank account
    Paidout,
    /// (Partially) refunded
    Refunded,
    /// Disputed by the customer and charged back
    ChargedBack,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::Paid => "paid",
            Self::Paidout => "paidout",
            Self::Refunded => "refunded",
            Self::ChargedBack => "charged_back",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => Self::Open,
            "pending" => Self::Pending,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            "paid" => Self::Paid,
            "paidout" => Self::Paidout,
            "refunded" => Self::Refunded,
            "charged_back" => Self::ChargedBack,
            _ => Self::Other(s),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URLs attached to a payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinks {
    /// Where the customer completes the payment
    #[serde(default)]
    pub payment_url: Option<String>,
    /// Where the customer is sent back to afterwards
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// A payment on the Mollie platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// `live` or `test`, depending on the API key that created the payment
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
    /// Absent when the payment cannot be refunded
    #[serde(default, serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize")]
    pub amount_refunded: Option<Decimal>,
    /// Amount that can still be refunded; absent when the payment cannot be
    /// refunded. May exceed `amount` for some methods.
    #[serde(default, serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize")]
    pub amount_remaining: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` lets the customer pick the method
    #[serde(default)]
    pub method: Option<String>,
    /// `null` is read like a missing status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    /// ISO-8601 duration, e.g. `P12DT11H30M45S`
    #[serde(default)]
    pub expiry_period: Option<String>,
    #[serde(default)]
    pub created_datetime: Option<String>,
    #[serde(default)]
    pub paid_datetime: Option<String>,
    #[serde(default)]
    pub cancelled_datetime: Option<String>,
    #[serde(default)]
    pub expired_datetime: Option<String>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Method specific details, e.g. `consumerName` for iDEAL
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
    #[serde(default)]
    pub links: Option<PaymentLinks>,
}

impl Payment {
    pub fn is_open(&self) -> bool {
        self.status == PaymentStatus::Open
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == PaymentStatus::Cancelled
    }

    pub fn is_expired(&self) -> bool {
        self.status == PaymentStatus::Expired
    }

    /// Is this payment (partially) refunded?
    pub fn is_refunded(&self) -> bool {
        self.status == PaymentStatus::Refunded
    }

    pub fn is_charged_back(&self) -> bool {
        self.status == PaymentStatus::ChargedBack
    }

    /// Has this payment been paid for?
    ///
    /// Looks at the paid timestamp rather than the status, so payments that
    /// moved on to `paidout` or `refunded` still count as paid.
    pub fn is_paid(&self) -> bool {
        self.paid_datetime
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    pub fn can_be_refunded(&self) -> bool {
        self.amount_remaining.is_some()
    }

    /// Credit card payments can only be refunded in full
    pub fn can_be_partially_refunded(&self) -> bool {
        self.can_be_refunded() && self.method.as_deref() != Some(CREDITCARD)
    }

    /// URL where the customer can complete the payment
    pub fn payment_url(&self) -> Option<&str> {
        self.links.as_ref()?.payment_url.as_deref()
    }

    pub fn amount_refunded_or_zero(&self) -> Decimal {
        self.amount_refunded.unwrap_or(Decimal::ZERO)
    }

    pub fn amount_remaining_or_zero(&self) -> Decimal {
        self.amount_remaining.unwrap_or(Decimal::ZERO)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.created_datetime.as_deref())
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.paid_datetime.as_deref())
    }

    pub fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.cancelled_datetime.as_deref())
    }

    pub fn expired_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.expired_datetime.as_deref())
    }

    /// Overwrite every field with the one from `src`, keeping `self` in place.
    ///
    /// Used to refresh a caller's payment after an operation returned a newer
    /// snapshot of it. Not atomic: callers sharing the payment must
    /// synchronize around it.
    pub fn copy_from(&mut self, src: Payment) {
        self.id = src.id;
        self.mode = src.mode;
        self.amount = src.amount;
        self.amount_refunded = src.amount_refunded;
        self.amount_remaining = src.amount_remaining;
        self.description = src.description;
        self.method = src.method;
        self.status = src.status;
        self.expiry_period = src.expiry_period;
        self.created_datetime = src.created_datetime;
        self.paid_datetime = src.paid_datetime;
        self.cancelled_datetime = src.cancelled_datetime;
        self.expired_datetime = src.expired_datetime;
        self.profile_id = src.profile_id;
        self.locale = src.locale;
        self.metadata = src.metadata;
        self.details = src.details;
        self.links = src.links;
    }
}
