//! HTTP request types for the ShipStation API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the ShipStation API.

use std::fmt;

use crate::clients::query::QueryParams;

/// HTTP methods used by the ShipStation API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating or mutating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the ShipStation API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. Bodies are JSON values; the client serializes them and sets
/// `Content-Type: application/json` when one is present.
///
/// # Example
///
/// ```rust
/// use shipstation_api::clients::{HttpRequest, HttpMethod};
/// use shipstation_api::QueryParams;
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = HttpRequest::builder(HttpMethod::Get, "orders/")
///     .query(QueryParams::new().param("orderStatus", "shipped"))
///     .build();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "orders/createorder")
///     .body(json!({"orderNumber": "TEST-1001"}))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<QueryParams>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `path` - The path (relative to the base URL) for the request
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<QueryParams>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Sets the query parameters.
    ///
    /// An empty collection is treated as no query string at all.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        if !query.is_empty() {
            self.query = Some(query);
        }
        self
    }

    /// Sets optional query parameters.
    ///
    /// Convenience for callers that thread an `Option<QueryParams>` through.
    #[must_use]
    pub fn query_opt(mut self, query: Option<QueryParams>) -> Self {
        if let Some(query) = query {
            self = self.query(query);
        }
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders/").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "orders/");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_creates_post_request_with_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "orders/createorder")
            .body(json!({"orderNumber": "TEST-1001"}))
            .build();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"orderNumber": "TEST-1001"})));
    }

    #[test]
    fn test_builder_drops_empty_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders/")
            .query(QueryParams::new())
            .build();

        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_keeps_populated_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders/")
            .query(QueryParams::new().param("orderStatus", "shipped"))
            .build();

        assert_eq!(
            request.query.unwrap().to_query_string(),
            "?orderStatus=shipped"
        );
    }

    #[test]
    fn test_query_opt_none_leaves_query_unset() {
        let request = HttpRequest::builder(HttpMethod::Get, "shipments/")
            .query_opt(None)
            .build();

        assert!(request.query.is_none());
    }
}
