//! Fulfillment operations.
//!
//! Fulfillments are shipments recorded outside ShipStation's label flow
//! (manually shipped shipments).

use crate::api::ShipStation;
use crate::clients::{HttpError, QueryParams};

impl ShipStation {
    /// Lists fulfillments, optionally filtered.
    ///
    /// `GET fulfillments/`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_fulfillments(
        &self,
        query: Option<QueryParams>,
    ) -> Result<serde_json::Value, HttpError> {
        self.get("fulfillments/", query).await
    }
}
