//! HTTP transport layer for ShipStation API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the ShipStation API. It handles credential
//! encoding, canonical query-string construction, and response decoding.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`QueryParams`]: Ordered query parameters with canonical encoding
//! - [`HttpError`]: Unified error type for transport and response failures
//!
//! Most users will not interact with this layer directly; the
//! [`ShipStation`](crate::ShipStation) client in [`crate::api`] wraps it
//! with one method per remote operation.
//!
//! # Status Validation
//!
//! Every request is validated uniformly: a non-2xx response from any
//! endpoint (read, write, or delete) becomes an [`HttpError::Response`].
//! There is no retry, no backoff, and no timeout override beyond the
//! transport default.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, BASE_URL, LIB_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::QueryParams;
