//! Configuration types for the ShipStation API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with ShipStation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShipStationConfig`]: The main configuration struct holding all client settings
//! - [`ShipStationConfigBuilder`]: A builder for constructing [`ShipStationConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`HostUrl`]: A validated host URL for overriding the API base URL
//!
//! # Example
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, HostUrl};

use crate::error::ConfigError;

/// Configuration for the ShipStation API client.
///
/// This struct holds all configuration needed for client operations: the
/// API credential pair, an optional host override, and an optional
/// User-Agent prefix. It is immutable after construction.
///
/// # Thread Safety
///
/// `ShipStationConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret(ApiSecret::new("your-secret").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct ShipStationConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShipStationConfig {
    /// Creates a new builder for constructing a `ShipStationConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ShipStationConfigBuilder {
        ShipStationConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the host URL override, if configured.
    ///
    /// When absent, requests go to `https://ssapi.shipstation.com`.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShipStationConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationConfig>();
};

/// Builder for constructing [`ShipStationConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `api_key` and `api_secret`; everything else has a default.
///
/// # Defaults
///
/// - `api_host`: `None` (requests go to the production ShipStation host)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, HostUrl};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .api_host(HostUrl::new("https://ssapi-proxy.example.com").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ShipStationConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShipStationConfigBuilder {
    /// Creates a new builder with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, api_secret: ApiSecret) -> Self {
        self.api_secret = Some(api_secret);
        self
    }

    /// Overrides the API host.
    ///
    /// Intended for proxy setups and test servers; production use should
    /// leave this unset.
    #[must_use]
    pub fn api_host(mut self, api_host: HostUrl) -> Self {
        self.api_host = Some(api_host);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` was not set.
    pub fn build(self) -> Result<ShipStationConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self.api_secret.ok_or(ConfigError::MissingRequiredField {
            field: "api_secret",
        })?;

        Ok(ShipStationConfig {
            api_key,
            api_secret,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
