//! HTTP response types for the ShipStation API client.
//!
//! This module provides the [`HttpResponse`] type for accessing decoded
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the ShipStation API.
///
/// Contains the response status code, headers, and the JSON-decoded body.
/// The body shape is defined entirely by ShipStation; this crate does not
/// model the payloads.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Extracts the provider-supplied error message from the body.
    ///
    /// ShipStation error payloads carry a `Message` field and, for server
    /// faults, an `ExceptionMessage` field. When neither is present the
    /// whole body is rendered so nothing the provider said is lost.
    #[must_use]
    pub fn provider_message(&self) -> String {
        for field in ["Message", "ExceptionMessage"] {
            if let Some(message) = self.body.get(field).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
        self.body.to_string()
    }
}
