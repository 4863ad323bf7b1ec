//! Refunds of a single payment

use super::base::Resource;
use super::payments;
use crate::api::client::MollieClient;
use crate::error::Result;
use crate::objects::PaymentRefund;

/// Accessor for `payments/<id>/refunds`
pub struct PaymentRefunds<'a> {
    resource: Resource<'a, PaymentRefund>,
}

impl<'a> PaymentRefunds<'a> {
    pub fn new(client: &'a MollieClient, payment_id: &str) -> Self {
        let name = format!(
            "{}/{}/refunds",
            payments::RESOURCE_NAME,
            urlencoding::encode(payment_id)
        );
        Self {
            resource: Resource::new(client, name),
        }
    }

    pub fn resource(&self) -> &Resource<'a, PaymentRefund> {
        &self.resource
    }

    pub async fn list_all(&self) -> Result<Vec<PaymentRefund>> {
        self.resource.list_all().await
    }

    pub async fn list(
        &self,
        offset: u32,
        limit: u32,
        options: &[(&str, &str)],
    ) -> Result<Vec<PaymentRefund>> {
        self.resource.list(offset, limit, options).await
    }

    pub async fn get(&self, refund_id: &str) -> Result<PaymentRefund> {
        self.resource.get(refund_id).await
    }
}
