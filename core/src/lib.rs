//! Async REST controller: GET/POST/PUT/DELETE against one configured host.
//!
//! # Overview
//! `RestController` turns four verb-specific calls into HTTP exchanges:
//! it joins the host and endpoint, encodes payloads as JSON, executes the
//! request through a shared `Transport`, and maps the response.
//!
//! # Design
//! - The host is stored verbatim and never changes after construction.
//! - One transport (a pooled `reqwest::Client` by default) is acquired at
//!   construction and shared by every call and every clone.
//! - Typed operations return `RestError` with the cause intact; the
//!   `*_object` operations keep the coarse "error message / `None` / `false`"
//!   contract.
//! - Dates are written ISO-8601 and read back in the local time zone.
//!
//! ```rust,ignore
//! use rest_controller::RestController;
//!
//! let controller = RestController::new("https://api.example.com/");
//! let item: Item = controller.get_object("/v1/items/1").await?;
//! let saved = controller.put_object("v1/items/1", &item).await;
//! ```

pub mod codec;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod uri;

pub use controller::RestController;
pub use error::{GetObjectError, RestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use uri::create_uri;
