//! Dashboards sub-client.

use crate::client::AliceClient;
use crate::error::SdkError;
use serde_json::Value;

pub struct Dashboards<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Dashboards<'a> {
    /// Load dashboards for the given hotel.
    pub async fn all(&self, hotel_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_dashboards(hotel_id).await?)
    }

    /// Load the data sets behind a dashboard.
    pub async fn data_sets(&self, hotel_id: i64, dashboard_id: i64) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_dashboard_data_sets(hotel_id, dashboard_id)
            .await?)
    }
}
