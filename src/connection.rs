//! HTTP connection to the CRM REST API.
//!
//! Wraps a [`reqwest::Client`] bound to the API base URL. Every request goes
//! through [`Connection::send`], which maps non-2xx statuses to
//! [`CrmError::Status`] and decodes JSON bodies with `serde_json` so decode
//! failures surface as [`CrmError::Json`] rather than transport errors.

use crate::error::{CrmError, Result};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Query-string pairs for a request.
pub type QueryParams<'q> = &'q [(&'q str, String)];

/// Cloneable handle to the CRM API. Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Connection {
    base_url: Url,
    client: Client,
}

impl Connection {
    /// Create a connection to `base_url` with the given request timeout.
    ///
    /// The base URL must be absolute (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            CrmError::InvalidArgument(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CrmError::InvalidArgument(format!(
                "API base URL '{}' cannot carry a path",
                base_url
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, client })
    }

    /// The API base URL this connection is bound to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL by appending percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CrmError::InvalidArgument(format!("API base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON document.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: QueryParams<'_>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let body = self.send(Method::GET, url, query, None::<&()>).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a JSON document, returning `None` when the API answers 404.
    pub async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>> {
        match self.get_json(segments, &[]).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// POST an optional JSON body and decode the JSON response.
    pub async fn post_json<B, T>(
        &self,
        segments: &[&str],
        query: QueryParams<'_>,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let bytes = self.send(Method::POST, url, query, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let bytes = self.send(Method::PUT, url, &[], Some(body)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// PATCH with query parameters only and decode the JSON response.
    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: QueryParams<'_>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let bytes = self.send(Method::PATCH, url, query, None::<&()>).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// DELETE a resource. Any response body is discarded.
    pub async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments)?;
        self.send(Method::DELETE, url, &[], None::<&()>).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        query: QueryParams<'_>,
        body: Option<&B>,
    ) -> Result<Vec<u8>> {
        debug!(%method, %url, "CRM API request");

        let mut request: RequestBuilder = self.client.request(method, url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CrmError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}
