//! Carrier, package, and service operations.

use crate::api::ShipStation;
use crate::clients::{HttpError, QueryParams};

impl ShipStation {
    /// Lists the carriers connected to the account.
    ///
    /// `GET carriers`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_carriers(&self) -> Result<serde_json::Value, HttpError> {
        self.get("carriers", None).await
    }

    /// Lists the package types offered by a carrier.
    ///
    /// `GET carriers/listpackages`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_packages_by_carrier(
        &self,
        carrier_code: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let query = QueryParams::new().param("carrierCode", carrier_code);
        self.get("carriers/listpackages", Some(query)).await
    }

    /// Lists the shipping services offered by a carrier.
    ///
    /// `GET carriers/listservices`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_services_by_carrier(
        &self,
        carrier_code: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let query = QueryParams::new().param("carrierCode", carrier_code);
        self.get("carriers/listservices", Some(query)).await
    }
}
