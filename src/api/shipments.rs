//! Shipment operations: listing, rate quoting, and label handling.

use serde_json::json;

use crate::api::ShipStation;
use crate::clients::{HttpError, QueryParams};

impl ShipStation {
    /// Lists shipments, optionally filtered.
    ///
    /// `GET shipments/` — supported filters include `recipientName`,
    /// `trackingNumber`, `shipDateStart`, and the pagination parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_shipments(
        &self,
        query: Option<QueryParams>,
    ) -> Result<serde_json::Value, HttpError> {
        self.get("shipments/", query).await
    }

    /// Requests shipping rates for a prospective shipment.
    ///
    /// `POST shipments/getrates` — the rate options payload is passed
    /// through unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn get_rates(
        &self,
        rate_options: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.post("shipments/getrates", rate_options).await
    }

    /// Creates a shipment label.
    ///
    /// `POST shipments/createlabel`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn create_shipment_label(
        &self,
        label: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.post("shipments/createlabel", label).await
    }

    /// Voids the label of the given shipment.
    ///
    /// `POST shipments/voidlabel`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn void_label(&self, shipment_id: i64) -> Result<serde_json::Value, HttpError> {
        let body = json!({ "shipmentId": shipment_id });
        self.post("shipments/voidlabel", body).await
    }
}
