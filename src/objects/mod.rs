//! Domain objects returned by the API
//!
//! Every object is a snapshot deserialized from a response. Amounts are exact
//! decimals; timestamps are kept as the ISO-8601 strings the API sends, with
//! parsed accessors next to them.

mod issuer;
pub mod method;
mod payment;
mod refund;

pub use issuer::Issuer;
pub use method::{MethodAmount, MethodImage, PaymentMethod};
pub use payment::{Payment, PaymentLinks, PaymentStatus};
pub use refund::{PaymentRefund, RefundStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse an ISO-8601 timestamp as sent by the API, e.g. `2013-12-25T10:30:54.0Z`
fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Read a JSON `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
