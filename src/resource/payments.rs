//! Payments resource
//!
//! Payment creation with named fields, plus refunds, on top of the generic
//! accessor.

use super::base::Resource;
use crate::api::client::MollieClient;
use crate::error::{Error, Result};
use crate::objects::{Payment, PaymentRefund};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

/// Collection name of payments
pub const RESOURCE_NAME: &str = "payments";

/// Fields of a new payment
///
/// Fields left as `None` are omitted from the request body entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
    /// Leave empty to let the customer choose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl PaymentRequest {
    pub fn new(amount: Decimal, description: &str, redirect_url: &str) -> Self {
        Self {
            amount,
            method: None,
            description: Some(description.to_string()),
            redirect_url: Some(redirect_url.to_string()),
            metadata: None,
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of a partial refund
#[derive(Serialize)]
struct RefundRequest {
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    amount: Decimal,
}

/// Accessor for `payments`
pub struct Payments<'a> {
    resource: Resource<'a, Payment>,
}

impl<'a> Payments<'a> {
    pub fn new(client: &'a MollieClient) -> Self {
        Self {
            resource: Resource::new(client, RESOURCE_NAME),
        }
    }

    /// The underlying generic accessor
    pub fn resource(&self) -> &Resource<'a, Payment> {
        &self.resource
    }

    pub async fn list_all(&self) -> Result<Vec<Payment>> {
        self.resource.list_all().await
    }

    pub async fn list(
        &self,
        offset: u32,
        limit: u32,
        options: &[(&str, &str)],
    ) -> Result<Vec<Payment>> {
        self.resource.list(offset, limit, options).await
    }

    pub async fn get(&self, id: &str) -> Result<Payment> {
        self.resource.get(id).await
    }

    /// Create a payment
    ///
    /// A `method` of `None` lets the customer pick one on the payment screen.
    pub async fn create(
        &self,
        amount: Decimal,
        method: Option<&str>,
        description: &str,
        redirect_url: &str,
        metadata: Option<Map<String, Value>>,
    ) -> Result<Payment> {
        let request = PaymentRequest {
            amount,
            method: method.map(str::to_string),
            description: Some(description.to_string()),
            redirect_url: Some(redirect_url.to_string()),
            metadata,
        };
        self.create_with(&request).await
    }

    /// Create a payment from a prepared request
    pub async fn create_with(&self, request: &PaymentRequest) -> Result<Payment> {
        // A request always encodes to an object, so a payment comes back
        self.resource
            .create(request)
            .await?
            .ok_or_else(|| Error::decode("null", None))
    }

    /// Refund a payment, fully when `amount` is `None`
    ///
    /// On success `payment` is updated in place with the snapshot embedded in
    /// the refund response, and the refund is returned.
    pub async fn refund(
        &self,
        payment: &mut Payment,
        amount: Option<Decimal>,
    ) -> Result<PaymentRefund> {
        let path = format!(
            "{}/{}/refunds",
            RESOURCE_NAME,
            urlencoding::encode(&payment.id)
        );
        let body = amount
            .map(|amount| serde_json::to_string(&RefundRequest { amount }))
            .transpose()
            .map_err(Error::Encode)?;

        let refund: PaymentRefund = self.resource.call(Method::POST, &path, body).await?;

        if let Some(snapshot) = refund.payment.clone() {
            payment.copy_from(snapshot);
        } else {
            tracing::debug!("Refund {} carried no payment snapshot", refund.id);
        }

        Ok(refund)
    }
}
