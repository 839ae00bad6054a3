//! HTTP exchange types shared by the controller and its transports.
//!
//! # Design
//! Requests and responses are plain data. The controller builds an
//! `HttpRequest` deterministically, hands it to a `Transport`, and maps the
//! returned `HttpResponse`. Keeping the exchange as data lets the request
//! shape be asserted without a network and lets any transport be swapped in.

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::RestError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// This is the "raw response handle" returned by `post`/`post_object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// 200..=299.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value matching `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body with the same rules `get` uses.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        codec::decode(&self.body)
    }
}
