//! The ShipStation API operation surface.
//!
//! This module provides the [`ShipStation`] client, which exposes one async
//! method per remote endpoint. Operations are grouped by resource:
//!
//! - [`orders`]: retrieval, listing, create/update, shipping, tagging, holds
//! - [`shipments`]: listing, rates, label creation, label voiding
//! - [`fulfillments`]: listing
//! - [`accounts`]: account tag listing
//! - [`warehouses`]: listing and creation
//! - [`carriers`]: carrier, package, and service listing
//! - [`webhooks`]: listing, subscription, unsubscription
//!
//! Every operation issues exactly one outbound HTTP request and resolves
//! with the JSON-decoded response body. Payload shapes are defined by
//! ShipStation and passed through opaquely as [`serde_json::Value`], except
//! where a small typed payload documents the wire contract
//! ([`ShippedNotice`], [`WebhookSubscription`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{ApiKey, ApiSecret, ShipStation, ShipStationConfig};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .api_secret(ApiSecret::new("your-api-secret")?)
//!     .build()?;
//! let client = ShipStation::new(&config);
//!
//! let order = client.get_order(123_456_789).await?;
//! println!("order: {order}");
//! ```

mod accounts;
mod carriers;
mod fulfillments;
mod orders;
mod shipments;
mod warehouses;
mod webhooks;

pub use orders::ShippedNotice;
pub use webhooks::WebhookSubscription;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, QueryParams};
use crate::config::ShipStationConfig;

/// Async client for the ShipStation API.
///
/// Construct one per credential pair; it is cheap to share. All state —
/// the precomputed Basic-Auth header and the connection pool — is immutable
/// after construction, so concurrent calls from multiple tasks are safe
/// and independent.
///
/// # Thread Safety
///
/// `ShipStation` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct ShipStation {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify ShipStation is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStation>();
};

impl ShipStation {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &ShipStationConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the base URI requests are issued against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Issues a GET request and returns the decoded body.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query_opt(query)
            .build();
        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Issues a POST request with a JSON body and returns the decoded body.
    pub(crate) async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build();
        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Issues a DELETE request and returns the decoded body.
    pub(crate) async fn delete(&self, path: &str) -> Result<serde_json::Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build();
        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }
}
