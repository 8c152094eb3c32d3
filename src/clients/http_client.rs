//! HTTP client for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the ShipStation API.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::QueryParams;
use crate::config::ShipStationConfig;

/// Production API host.
pub const BASE_URL: &str = "https://ssapi.shipstation.com";

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ShipStation API.
///
/// The client handles:
/// - Base URI selection (production host or configured override)
/// - Default headers: `Authorization: Basic …`, `Accept`, and `User-Agent`
/// - Canonical query-string encoding
/// - Response body decoding and uniform status validation
///
/// The Basic-Auth credential is computed once at construction and never
/// mutated afterwards; concurrent requests share no mutable state.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "carriers").build();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://ssapi.shipstation.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The `Authorization: Basic base64(apiKey:apiSecret)` header is
    /// computed here, once, and attached to every request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        let base_uri = config
            .api_host()
            .map_or_else(|| BASE_URL.to_string(), |host| host.as_ref().to_string());

        let credential = BASE64.encode(format!(
            "{}:{}",
            config.api_key().as_ref(),
            config.api_secret().as_ref()
        ));

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}ShipStation API Library v{LIB_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Authorization".to_string(), format!("Basic {credential}"));
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the ShipStation API.
    ///
    /// The query string is encoded by this crate rather than the transport
    /// so that parameter order and percent-encoding stay canonical.
    ///
    /// Status validation is uniform across all methods: any non-2xx
    /// response is an error carrying the status code and the
    /// provider-supplied message.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the transport fails (connection
    /// refused, DNS failure, timeout) and [`HttpError::Response`] when
    /// ShipStation answers with a non-2xx status.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let query_string = request
            .query
            .as_ref()
            .map_or_else(String::new, QueryParams::to_query_string);
        let url = format!("{}/{}{}", self.base_uri, request.path, query_string);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Empty bodies (e.g. some DELETE responses) decode to an empty
        // object; undecodable bodies are preserved verbatim.
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, headers, body);

        // Raw bodies only ever appear at the most verbose level.
        tracing::trace!(status = code, body = %response.body, "raw ShipStation response");

        if response.is_ok() {
            return Ok(response);
        }

        let message = response.provider_message();
        tracing::error!(
            status = code,
            path = %request.path,
            "ShipStation request failed: {message}"
        );
        Err(HttpError::Response(HttpResponseError { code, message }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
