//! Generic resource accessor
//!
//! Handles list/get/create against one REST collection and turns response
//! bodies into typed objects.

use crate::api::client::MollieClient;
use crate::error::{ApiError, Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Typed access to one API collection such as `payments`
pub struct Resource<'a, T> {
    client: &'a MollieClient,
    name: Cow<'static, str>,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Resource<'a, T> {
    /// Bind a collection name to an entity type
    pub fn new(client: &'a MollieClient, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            client,
            name: name.into(),
            _entity: PhantomData,
        }
    }

    /// Name of the collection, used as the base of every path
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List objects with the default offset and count
    pub async fn list_all(&self) -> Result<Vec<T>> {
        self.list(0, 0, &[]).await
    }

    /// List objects
    ///
    /// `options` are sent as extra query parameters. An option named `offset`
    /// or `count` takes precedence over the corresponding argument.
    pub async fn list(&self, offset: u32, limit: u32, options: &[(&str, &str)]) -> Result<Vec<T>> {
        let path = format!("{}?{}", self.name, build_query(offset, limit, options));
        let text = self.client.perform_http_call(Method::GET, &path, None).await?;
        let mut object = parse_response(&text)?;

        let Some(data) = object.remove("data") else {
            return Err(Error::decode(text, None));
        };

        serde_json::from_value(data).map_err(|e| Error::decode(text, Some(e)))
    }

    /// Fetch a single object by id
    pub async fn get(&self, id: &str) -> Result<T> {
        let path = format!("{}/{}", self.name, urlencoding::encode(id));
        self.call(Method::GET, &path, None).await
    }

    /// Create an object from a set of fields
    ///
    /// Returns `Ok(None)` without calling the API when `fields` encodes to
    /// JSON `null`.
    pub async fn create<B: Serialize + ?Sized>(&self, fields: &B) -> Result<Option<T>> {
        let body = serde_json::to_value(fields).map_err(Error::Encode)?;
        if body.is_null() {
            tracing::debug!("Nothing to create on {}", self.name);
            return Ok(None);
        }

        self.call(Method::POST, &self.name, Some(body.to_string()))
            .await
            .map(Some)
    }

    /// Call the API and return the decoded response object
    pub async fn perform_api_call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Map<String, Value>> {
        let text = self.client.perform_http_call(method, path, body).await?;
        parse_response(&text)
    }

    /// Call the API and decode the response object as `R`
    pub(crate) async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R> {
        let text = self.client.perform_http_call(method, path, body).await?;
        let object = parse_response(&text)?;

        serde_json::from_value(Value::Object(object)).map_err(|e| Error::decode(text, Some(e)))
    }
}

/// Build the query string for a list call
///
/// Parameters keep insertion order: `offset`, `count`, then the options. An
/// option with an existing key overwrites the value in place.
pub fn build_query(offset: u32, limit: u32, options: &[(&str, &str)]) -> String {
    let mut params: Vec<(String, String)> = vec![
        ("offset".to_string(), offset.to_string()),
        ("count".to_string(), limit.to_string()),
    ];

    for (key, value) in options {
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => params.push((key.to_string(), value.to_string())),
        }
    }

    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a response body into its top-level object
///
/// Bodies that are not a JSON object fail with [`Error::Decode`]; objects
/// carrying an `error` envelope fail with [`Error::Api`].
pub fn parse_response(text: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::decode(text, Some(e)))?;

    let Value::Object(mut object) = value else {
        return Err(Error::decode(text, None));
    };

    if let Some(error) = object.remove("error") {
        let api_error: ApiError =
            serde_json::from_value(error).map_err(|e| Error::decode(text, Some(e)))?;
        tracing::debug!("API reported error: {}", api_error);
        return Err(api_error.into());
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Issuer;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn client_with(transport: &MockTransport) -> MollieClient {
        let mut client = MollieClient::with_transport(transport.clone());
        client.set_api_key("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM").unwrap();
        client
    }

    #[test]
    fn test_build_query_defaults() {
        assert_eq!(build_query(0, 0, &[]), "offset=0&count=0");
        assert_eq!(build_query(10, 50, &[]), "offset=10&count=50");
    }

    #[test]
    fn test_build_query_caller_values_win() {
        assert_eq!(
            build_query(0, 0, &[("count", "25"), ("offset", "5")]),
            "offset=5&count=25"
        );
        assert_eq!(
            build_query(0, 0, &[("offset", "0"), ("count", "0"), ("locale", "de")]),
            "offset=0&count=0&locale=de"
        );
    }

    #[test]
    fn test_build_query_encodes_values() {
        assert_eq!(
            build_query(0, 0, &[("locale", "nl NL&x")]),
            "offset=0&count=0&locale=nl%20NL%26x"
        );
    }

    #[test]
    fn test_parse_response_rejects_non_objects() {
        for body in ["", "not json", "[1,2]", "\"text\"", "null"] {
            match parse_response(body) {
                Err(Error::Decode { body: b, .. }) => assert_eq!(b, body),
                other => panic!("unexpected {other:?} for {body:?}"),
            }
        }
    }

    #[test]
    fn test_parse_response_detects_error_envelope() {
        let err = parse_response(
            r#"{ "error":{ "type":"request", "message":"Unauthorized request", "links":{ "documentation":"https://www.mollie.nl/api/docs/" } } }"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "API Error (request): Unauthorized request.");
        let api = err.api_error().unwrap();
        assert_eq!(api.kind, "request");
        assert_eq!(api.field, None);
    }

    #[test]
    fn test_parse_response_malformed_envelope_is_decode_error() {
        let err = parse_response(r#"{"error":"boom"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_get_builds_path_from_name_and_id() {
        let transport = MockTransport::default()
            .respond(r#"{"id":"ideal_INGBNL2A","name":"ING","method":"ideal"}"#);
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        let issuer = tokio_test::block_on(issuers.get("ideal_INGBNL2A")).unwrap();

        assert_eq!(issuer.name, "ING");
        assert_eq!(
            transport.calls()[0].url,
            "https://api.mollie.nl/v1/issuers/ideal_INGBNL2A"
        );
        assert_eq!(transport.calls()[0].method, Method::GET);
    }

    #[test]
    fn test_list_requires_data_array() {
        let transport = MockTransport::default().respond(r#"{"totalCount":0}"#);
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        let err = tokio_test::block_on(issuers.list_all()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_entity_mismatch_is_decode_error_with_body() {
        let transport = MockTransport::default().respond(r#"{"id":42}"#);
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        match tokio_test::block_on(issuers.get("x")) {
            Err(Error::Decode { body, source }) => {
                assert_eq!(body, r#"{"id":42}"#);
                assert!(source.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_create_null_fields_is_a_no_op() {
        let transport = MockTransport::default();
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        let created = tokio_test::block_on(issuers.create(&Option::<Value>::None)).unwrap();

        assert!(created.is_none());
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_create_posts_fields_to_collection() {
        let transport = MockTransport::default()
            .respond(r#"{"id":"ideal_TESTNL99","name":"TBM Bank","method":"ideal"}"#);
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        let created = tokio_test::block_on(issuers.create(&json!({"name": "TBM Bank"})))
            .unwrap()
            .unwrap();

        assert_eq!(created.id, "ideal_TESTNL99");
        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.url, "https://api.mollie.nl/v1/issuers");
        assert_eq!(call.body.as_deref(), Some(r#"{"name":"TBM Bank"}"#));
    }

    #[test]
    fn test_perform_api_call_returns_object() {
        let transport = MockTransport::default().respond(r#"{"resource":"issuer","id":"x"}"#);
        let client = client_with(&transport);
        let issuers: Resource<'_, Issuer> = Resource::new(&client, "issuers");

        let object =
            tokio_test::block_on(issuers.perform_api_call(Method::GET, "issuers/x", None)).unwrap();
        assert_eq!(object["id"], "x");
    }
}
