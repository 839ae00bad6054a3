//! `RestController`: four HTTP verbs against one host.
//!
//! # Design
//! Every operation is one linear exchange: build the URI, build an
//! `HttpRequest`, execute it through the shared transport, map the response.
//! There are two layers:
//! - `get` / `post` / `put` / `delete` return `Result<_, RestError>` and keep
//!   the cause of any failure.
//! - `get_object` / `post_object` / `put_object` / `delete_object` keep the
//!   coarse contract callers of the classic wrapper rely on: a two-message
//!   error for GET, `None` / `false` for the rest. The discarded cause is
//!   logged at `warn`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{self, CONTENT_TYPE_JSON};
use crate::error::{GetObjectError, RestError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::uri::create_uri;

/// Async REST client bound to a single host.
///
/// Cloning is cheap and clones share the same transport.
#[derive(Clone)]
pub struct RestController {
    host: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for RestController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestController").field("host", &self.host).finish_non_exhaustive()
    }
}

impl RestController {
    /// Store `host` verbatim and acquire the default `reqwest` transport.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_transport(host, ReqwestTransport::new())
    }

    pub fn with_transport(host: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            host: host.into(),
            transport: Arc::new(transport),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// GET asks caches on the way to revalidate with the origin (`no-cache`)
    /// and not to keep a copy of the answer (`no-store`).
    pub fn build_get(&self, endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: create_uri(&self.host, endpoint),
            headers: vec![
                ("cache-control".to_string(), "no-cache, no-store".to_string()),
                ("pragma".to_string(), "no-cache".to_string()),
            ],
            body: None,
        }
    }

    pub fn build_post<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> Result<HttpRequest, RestError> {
        self.build_with_body(HttpMethod::Post, endpoint, payload)
    }

    pub fn build_put<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> Result<HttpRequest, RestError> {
        self.build_with_body(HttpMethod::Put, endpoint, payload)
    }

    pub fn build_delete(&self, endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: create_uri(&self.host, endpoint),
            headers: Vec::new(),
            body: None,
        }
    }

    fn build_with_body<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: &P,
    ) -> Result<HttpRequest, RestError> {
        let body = codec::encode(payload)?;
        Ok(HttpRequest {
            method,
            url: create_uri(&self.host, endpoint),
            headers: vec![("content-type".to_string(), CONTENT_TYPE_JSON.to_string())],
            body: Some(body),
        })
    }

    /// GET `endpoint` and decode a 2xx body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RestError> {
        let response = self.send(self.build_get(endpoint)).await?;
        codec::decode(&response.body)
    }

    /// POST `payload` as JSON and return the raw 2xx response.
    pub async fn post<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> Result<HttpResponse, RestError> {
        let request = self.build_post(endpoint, payload)?;
        self.send(request).await
    }

    /// PUT `payload` as JSON. The response body is ignored.
    pub async fn put<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> Result<(), RestError> {
        let request = self.build_put(endpoint, payload)?;
        self.send(request).await.map(|_| ())
    }

    /// DELETE `endpoint`. The response body is ignored.
    pub async fn delete(&self, endpoint: &str) -> Result<(), RestError> {
        self.send(self.build_delete(endpoint)).await.map(|_| ())
    }

    /// Execute `request` and turn non-2xx statuses into `RestError::Status`.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let method = request.method;
        tracing::debug!(method = method.as_str(), url = %request.url, "sending request");

        let response = self.transport.execute(request).await?;
        tracing::debug!(method = method.as_str(), status = response.status, "received response");

        if response.is_success() {
            Ok(response)
        } else {
            Err(RestError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Like `get`, but failures collapse to a fixed-message `GetObjectError`.
    pub async fn get_object<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, GetObjectError> {
        self.get(endpoint).await.map_err(|err| {
            tracing::warn!(endpoint, error = %err, "GET failed");
            GetObjectError::from(err)
        })
    }

    /// The 2xx response, or `None` for any failure at all.
    pub async fn post_object<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> Option<HttpResponse> {
        self.post(endpoint, payload)
            .await
            .inspect_err(|err| tracing::warn!(endpoint, error = %err, "POST failed"))
            .ok()
    }

    /// `true` only for a 2xx response.
    pub async fn put_object<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P) -> bool {
        self.put(endpoint, payload)
            .await
            .inspect_err(|err| tracing::warn!(endpoint, error = %err, "PUT failed"))
            .is_ok()
    }

    /// `true` only for a 2xx response.
    pub async fn delete_object(&self, endpoint: &str) -> bool {
        self.delete(endpoint)
            .await
            .inspect_err(|err| tracing::warn!(endpoint, error = %err, "DELETE failed"))
            .is_ok()
    }
}
