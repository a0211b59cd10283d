//! Staff sub-client — users and workflow statuses.

use crate::client::AliceClient;
use crate::error::SdkError;
use serde_json::Value;

pub struct Staff<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Staff<'a> {
    /// Load staff users for the given hotel.
    pub async fn users(&self, hotel_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_users(hotel_id).await?)
    }

    /// Load the workflow statuses configured for the given hotel.
    pub async fn workflow_statuses(&self, hotel_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_workflow_statuses(hotel_id).await?)
    }
}
