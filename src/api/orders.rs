//! Order operations.
//!
//! Covers retrieval, listing, create/update, label creation, mark-as-shipped,
//! tagging, and holds. Order payloads are passed through opaquely; the one
//! typed payload here is [`ShippedNotice`], whose optional fields must be
//! omitted from the wire body when not supplied.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::api::ShipStation;
use crate::clients::{HttpError, QueryParams};

/// Payload for marking an order as shipped.
///
/// Only `order_id` is required. Every optional field is serialized only
/// when explicitly provided — an unset field is absent from the JSON body,
/// never sent as `null`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use shipstation_api::ShippedNotice;
///
/// let notice = ShippedNotice::new(123_456_789)
///     .carrier_code("usps")
///     .ship_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
///     .tracking_number("9400100000000000000000")
///     .notify_customer(true);
///
/// let body = serde_json::to_value(&notice).unwrap();
/// assert_eq!(body["shipDate"], "2024-03-15");
/// assert!(body.get("notifySalesChannel").is_none());
/// ```
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippedNotice {
    /// The identifier of the order to mark shipped.
    pub order_id: i64,
    /// Carrier code (e.g. `usps`, `fedex`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
    /// Ship date, serialized as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<NaiveDate>,
    /// Tracking number for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Whether ShipStation should email the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,
    /// Whether ShipStation should notify the originating sales channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_sales_channel: Option<bool>,
}

impl ShippedNotice {
    /// Creates a notice for the given order with all optional fields unset.
    #[must_use]
    pub const fn new(order_id: i64) -> Self {
        Self {
            order_id,
            carrier_code: None,
            ship_date: None,
            tracking_number: None,
            notify_customer: None,
            notify_sales_channel: None,
        }
    }

    /// Sets the carrier code.
    #[must_use]
    pub fn carrier_code(mut self, carrier_code: impl Into<String>) -> Self {
        self.carrier_code = Some(carrier_code.into());
        self
    }

    /// Sets the ship date.
    #[must_use]
    pub const fn ship_date(mut self, ship_date: NaiveDate) -> Self {
        self.ship_date = Some(ship_date);
        self
    }

    /// Sets the tracking number.
    #[must_use]
    pub fn tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    /// Sets whether the customer is notified.
    #[must_use]
    pub const fn notify_customer(mut self, notify: bool) -> Self {
        self.notify_customer = Some(notify);
        self
    }

    /// Sets whether the sales channel is notified.
    #[must_use]
    pub const fn notify_sales_channel(mut self, notify: bool) -> Self {
        self.notify_sales_channel = Some(notify);
        self
    }
}

impl ShipStation {
    /// Retrieves a single order by its identifier.
    ///
    /// `GET orders/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on transport failure and
    /// [`HttpError::Response`] on a non-2xx status (including 404 for an
    /// unknown order).
    pub async fn get_order(&self, order_id: i64) -> Result<serde_json::Value, HttpError> {
        let path = format!("orders/{order_id}");
        self.get(&path, None).await
    }

    /// Lists orders, optionally filtered.
    ///
    /// `GET orders/` — see the ShipStation documentation for supported
    /// filter parameters (`orderStatus`, `storeId`, `orderDateStart`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_orders(
        &self,
        query: Option<QueryParams>,
    ) -> Result<serde_json::Value, HttpError> {
        self.get("orders/", query).await
    }

    /// Saves (creates or updates) an order.
    ///
    /// `POST orders/createorder`
    ///
    /// If the payload carries an `orderKey`, the call becomes idempotent and
    /// the existing order with that key is updated. ShipStation only permits
    /// updates to orders in an open status (`awaiting_payment`,
    /// `awaiting_shipment`, `on_hold`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn save_order(
        &self,
        order: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.post("orders/createorder", order).await
    }

    /// Creates a shipping label for an existing order.
    ///
    /// `POST orders/createlabelfororder`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn create_label_for_order(
        &self,
        label_info: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.post("orders/createlabelfororder", label_info).await
    }

    /// Marks an order as shipped without creating a label.
    ///
    /// `POST orders/markasshipped`
    ///
    /// Optional fields of the [`ShippedNotice`] are included in the request
    /// body only when set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn mark_order_as_shipped(
        &self,
        notice: &ShippedNotice,
    ) -> Result<serde_json::Value, HttpError> {
        let body = serde_json::to_value(notice)
            .unwrap_or_else(|_| json!({ "orderId": notice.order_id }));
        self.post("orders/markasshipped", body).await
    }

    /// Lists orders with the given status carrying the given tag.
    ///
    /// `GET orders/listbytag`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_orders_tagged_with(
        &self,
        order_status: &str,
        tag_id: i64,
    ) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(order_status, tag_id, "listing orders by tag");
        let query = QueryParams::new()
            .param("orderStatus", order_status)
            .param("tagId", tag_id);
        self.get("orders/listbytag", Some(query)).await
    }

    /// Adds a tag to an order.
    ///
    /// `POST orders/addtag`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn tag_order(
        &self,
        order_id: i64,
        tag_id: i64,
    ) -> Result<serde_json::Value, HttpError> {
        let body = json!({ "orderId": order_id, "tagId": tag_id });
        self.post("orders/addtag", body).await
    }

    /// Removes a tag from an order.
    ///
    /// `POST orders/removetag`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn untag_order(
        &self,
        order_id: i64,
        tag_id: i64,
    ) -> Result<serde_json::Value, HttpError> {
        let body = json!({ "orderId": order_id, "tagId": tag_id });
        self.post("orders/removetag", body).await
    }

    /// Places an order on hold until the given date.
    ///
    /// `POST orders/holduntil` — the date is sent as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn hold_order_until(
        &self,
        order_id: i64,
        hold_until_date: NaiveDate,
    ) -> Result<serde_json::Value, HttpError> {
        let body = json!({
            "orderId": order_id,
            "holdUntilDate": hold_until_date.format("%Y-%m-%d").to_string(),
        });
        self.post("orders/holduntil", body).await
    }
}
