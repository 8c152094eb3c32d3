//! # ShipStation API Rust Client
//!
//! A Rust client for the ShipStation API, providing type-safe configuration,
//! HTTP Basic authentication handling, and one async method per remote
//! endpoint.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShipStationConfig`] and [`ShipStationConfigBuilder`]
//! - Validated newtypes for API credentials with masked secret output
//! - The [`ShipStation`] client covering orders, shipments, fulfillments,
//!   account tags, warehouses, carriers, and webhooks
//! - Canonical, insertion-ordered query-string encoding via [`QueryParams`]
//! - A uniform error taxonomy separating transport failures from
//!   application-level rejections
//!
//! ## Quick Start
//!
//! ```rust
//! use shipstation_api::{ApiKey, ApiSecret, ShipStation, ShipStationConfig};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ShipStation::new(&config);
//! ```
//!
//! ## Making API Calls
//!
//! Every operation resolves with the JSON-decoded response body as a
//! [`serde_json::Value`]; payload shapes are defined by ShipStation.
//!
//! ```rust,ignore
//! use shipstation_api::QueryParams;
//!
//! // Retrieve one order
//! let order = client.get_order(123_456_789).await?;
//!
//! // List awaiting shipments for a store
//! let query = QueryParams::new()
//!     .param("orderStatus", "awaiting_shipment")
//!     .param("storeId", "12345");
//! let orders = client.list_orders(Some(query)).await?;
//!
//! // Mark an order shipped, omitting unset optional fields from the body
//! use shipstation_api::ShippedNotice;
//! let result = client
//!     .mark_order_as_shipped(
//!         &ShippedNotice::new(123_456_789)
//!             .carrier_code("usps")
//!             .tracking_number("9400100000000000000000"),
//!     )
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Callers distinguish transport failures from application rejections by
//! matching on [`HttpError`]:
//!
//! ```rust,ignore
//! use shipstation_api::HttpError;
//!
//! match client.get_order(1).await {
//!     Ok(order) => println!("{order}"),
//!     Err(HttpError::Response(e)) => eprintln!("ShipStation said no: {e}"),
//!     Err(HttpError::Network(e)) => eprintln!("transport failure: {e}"),
//! }
//! ```
//!
//! Status validation is uniform: any non-2xx response from any endpoint is
//! an error carrying the status code and the provider-supplied message. No
//! call is retried; ShipStation's request-per-second quota is the caller's
//! responsibility.
//!
//! ## Logging
//!
//! Diagnostics go through the [`tracing`] facade. Raw response bodies are
//! logged at `trace` level only; request failures at `error` level. Install
//! a `tracing` subscriber to choose sinks and levels.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credential newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Immutable clients**: No call mutates shared client state

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{ShipStation, ShippedNotice, WebhookSubscription};
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, QueryParams, BASE_URL,
};
pub use config::{ApiKey, ApiSecret, HostUrl, ShipStationConfig, ShipStationConfigBuilder};
pub use error::ConfigError;
