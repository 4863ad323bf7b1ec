//! Payment methods resource

use super::base::Resource;
use crate::api::client::MollieClient;
use crate::error::Result;
use crate::objects::PaymentMethod;

pub const RESOURCE_NAME: &str = "methods";

/// Accessor for `methods`
pub struct Methods<'a> {
    resource: Resource<'a, PaymentMethod>,
}

impl<'a> Methods<'a> {
    pub fn new(client: &'a MollieClient) -> Self {
        Self {
            resource: Resource::new(client, RESOURCE_NAME),
        }
    }

    pub fn resource(&self) -> &Resource<'a, PaymentMethod> {
        &self.resource
    }

    pub async fn list_all(&self) -> Result<Vec<PaymentMethod>> {
        self.resource.list_all().await
    }

    /// List methods; pass `("locale", "de")` in `options` for translated descriptions
    pub async fn list(
        &self,
        offset: u32,
        limit: u32,
        options: &[(&str, &str)],
    ) -> Result<Vec<PaymentMethod>> {
        self.resource.list(offset, limit, options).await
    }

    pub async fn get(&self, id: &str) -> Result<PaymentMethod> {
        self.resource.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::MollieClient;
    use crate::testing::MockTransport;

    #[test]
    fn test_list_with_locale_keeps_parameter_order() {
        let transport = MockTransport::default().respond(
            r#"{"totalCount":2,"offset":0,"count":2,"data":[
                {"id":"ideal","description":"iDEAL","amount":{"minimum":"0.53","maximum":"50000.00"},"image":{"normal":"https://example/ideal.png","bigger":"https://example/ideal@2x.png"}},
                {"id":"creditcard","description":"Kreditkarte","amount":{"minimum":"0.31","maximum":"10000.00"},"image":{"normal":"https://example/cc.png","bigger":"https://example/cc@2x.png"}}
            ]}"#,
        );
        let mut client = MollieClient::with_transport(transport.clone());
        client.set_api_key("test_abc").unwrap();

        let methods = tokio_test::block_on(client.methods().list(
            0,
            0,
            &[("offset", "0"), ("count", "0"), ("locale", "de")],
        ))
        .unwrap();

        assert_eq!(
            transport.calls()[0].url,
            "https://api.mollie.nl/v1/methods?offset=0&count=0&locale=de"
        );
        assert_eq!(methods.len(), 2);
        for method in &methods {
            assert!(!method.id.is_empty());
            assert!(method.description.is_some());
            assert!(method.minimum_amount() < method.maximum_amount());
            assert!(method.image.as_ref().unwrap().normal.is_some());
        }
        assert_eq!(methods[1].description.as_deref(), Some("Kreditkarte"));
    }
}
