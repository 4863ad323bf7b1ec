//! Refunds

use super::{null_as_default, parse_datetime};
use super::Payment;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a refund
///
/// Note that `refunded` here means the money reached the consumer, unlike
/// [`super::PaymentStatus::Refunded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RefundStatus {
    /// Will be sent to the bank on the next business day, can still be cancelled
    Pending,
    /// Sent to the bank
    Processing,
    /// Transferred to the consumer
    Refunded,
    Other(String),
}

// Missing statuses match none of the predicates
impl Default for RefundStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl RefundStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Refunded => "refunded",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RefundStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "refunded" => Self::Refunded,
            _ => Self::Other(s),
        }
    }
}

impl From<RefundStatus> for String {
    fn from(status: RefundStatus) -> Self {
        match status {
            RefundStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (partial) refund of a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRefund {
    pub id: String,
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
    /// Snapshot of the refunded payment after the refund was registered
    #[serde(default)]
    pub payment: Option<Payment>,
    #[serde(default)]
    pub refunded_datetime: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RefundStatus,
}

impl PaymentRefund {
    pub fn is_pending(&self) -> bool {
        self.status == RefundStatus::Pending
    }

    pub fn is_processing(&self) -> bool {
        self.status == RefundStatus::Processing
    }

    /// Has the amount been transferred to the consumer?
    pub fn is_transferred(&self) -> bool {
        self.status == RefundStatus::Refunded
    }

    pub fn refunded_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.refunded_datetime.as_deref())
    }
}
