//! Issuers resource

use super::base::Resource;
use crate::api::client::MollieClient;
use crate::error::Result;
use crate::objects::Issuer;

pub const RESOURCE_NAME: &str = "issuers";

/// Accessor for `issuers`
pub struct Issuers<'a> {
    resource: Resource<'a, Issuer>,
}

impl<'a> Issuers<'a> {
    pub fn new(client: &'a MollieClient) -> Self {
        Self {
            resource: Resource::new(client, RESOURCE_NAME),
        }
    }

    pub fn resource(&self) -> &Resource<'a, Issuer> {
        &self.resource
    }

    pub async fn list_all(&self) -> Result<Vec<Issuer>> {
        self.resource.list_all().await
    }

    pub async fn list(
        &self,
        offset: u32,
        limit: u32,
        options: &[(&str, &str)],
    ) -> Result<Vec<Issuer>> {
        self.resource.list(offset, limit, options).await
    }

    pub async fn get(&self, id: &str) -> Result<Issuer> {
        self.resource.get(id).await
    }
}
