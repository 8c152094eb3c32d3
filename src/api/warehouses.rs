//! Warehouse (ship-from location) operations.

use crate::api::ShipStation;
use crate::clients::{HttpError, QueryParams};

impl ShipStation {
    /// Lists the account's warehouses.
    ///
    /// `GET warehouses/`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_warehouses(
        &self,
        query: Option<QueryParams>,
    ) -> Result<serde_json::Value, HttpError> {
        self.get("warehouses/", query).await
    }

    /// Creates a warehouse.
    ///
    /// `POST warehouses/createwarehouse` — the warehouse payload is passed
    /// through unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn create_warehouse(
        &self,
        warehouse: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.post("warehouses/createwarehouse", warehouse).await
    }
}
