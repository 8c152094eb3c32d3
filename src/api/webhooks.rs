//! Webhook subscription operations.
//!
//! These calls only manage subscriptions; receiving webhook deliveries is
//! the caller's concern.

use serde::Serialize;
use serde_json::json;

use crate::api::ShipStation;
use crate::clients::HttpError;

/// Payload for subscribing a webhook.
///
/// ShipStation's subscribe endpoint uses snake_case field names, unlike the
/// rest of its API. Optional fields are omitted from the body when unset.
///
/// # Example
///
/// ```rust
/// use shipstation_api::WebhookSubscription;
///
/// let subscription = WebhookSubscription::new(
///     "https://example.com/hooks/neworder",
///     "ORDER_NOTIFY",
/// )
/// .friendly_name("New order hook");
///
/// let body = serde_json::to_value(&subscription).unwrap();
/// assert_eq!(body["event"], "ORDER_NOTIFY");
/// assert!(body.get("store_id").is_none());
/// ```
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WebhookSubscription {
    /// The URL ShipStation delivers events to.
    pub target_url: String,
    /// The event type (e.g. `ORDER_NOTIFY`, `SHIP_NOTIFY`).
    pub event: String,
    /// Restricts the subscription to a single store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    /// Display name for the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

impl WebhookSubscription {
    /// Creates a subscription with the required target URL and event type.
    #[must_use]
    pub fn new(target_url: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            event: event.into(),
            store_id: None,
            friendly_name: None,
        }
    }

    /// Restricts the subscription to the given store.
    #[must_use]
    pub const fn store_id(mut self, store_id: i64) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }
}

impl ShipStation {
    /// Lists the account's webhook subscriptions.
    ///
    /// `GET webhooks`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_webhooks(&self) -> Result<serde_json::Value, HttpError> {
        self.get("webhooks", None).await
    }

    /// Subscribes a webhook.
    ///
    /// `POST webhooks/subscribe`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn subscribe_webhook(
        &self,
        subscription: &WebhookSubscription,
    ) -> Result<serde_json::Value, HttpError> {
        let body = serde_json::to_value(subscription).unwrap_or_else(|_| {
            json!({ "target_url": subscription.target_url, "event": subscription.event })
        });
        self.post("webhooks/subscribe", body).await
    }

    /// Unsubscribes a webhook by its identifier.
    ///
    /// `DELETE webhooks/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn unsubscribe_webhook(
        &self,
        webhook_id: i64,
    ) -> Result<serde_json::Value, HttpError> {
        let path = format!("webhooks/{webhook_id}");
        self.delete(&path).await
    }
}
