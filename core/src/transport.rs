//! The seam between the controller and the network.
//!
//! # Design
//! A `Transport` executes one `HttpRequest` and returns the `HttpResponse`
//! as data. Non-2xx statuses are *not* errors at this layer; `Err` means the
//! exchange itself failed. `ReqwestTransport` owns a single
//! `reqwest::Client`, so one connection pool serves every call the
//! controller makes.

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::error::RestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes HTTP requests for a `RestController`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RestError>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-built client (custom timeouts, proxies, TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
