//! HTTP-specific error types for the ShipStation API client.
//!
//! This module contains the error types surfaced by API operations. The
//! taxonomy is deliberately two-way: a request either failed in transit
//! (connection failure, DNS failure, timeout) or it reached ShipStation
//! and came back with a non-2xx status. No validation errors are raised
//! locally; input shape validation is deferred to the remote service.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{HttpError, ShipStation};
//!
//! match client.get_order(123).await {
//!     Ok(order) => println!("Order: {order}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("ShipStation rejected the call with status {}", e.code);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Transport failure: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-2xx response.
///
/// The display format preserves the shape callers of the original
/// connector matched against: `Error (code={code}) {message}`, where the
/// message is whatever ShipStation supplied (its `Message` or
/// `ExceptionMessage` field when present, the whole body otherwise).
///
/// # Example
///
/// ```rust
/// use shipstation_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     message: "The request is invalid.".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Error (code=422) The request is invalid.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error (code={code}) {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The provider-supplied error message.
    pub message: String,
}

/// Unified error type for API operations.
///
/// Use pattern matching to distinguish an application-level rejection
/// from a transport failure.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response from ShipStation.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
