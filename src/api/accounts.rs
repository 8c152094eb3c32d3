//! Account operations.

use crate::api::ShipStation;
use crate::clients::HttpError;

impl ShipStation {
    /// Lists the tags defined on the account.
    ///
    /// `GET accounts/listtags`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx status.
    pub async fn list_tags(&self) -> Result<serde_json::Value, HttpError> {
        self.get("accounts/listtags", None).await
    }
}
