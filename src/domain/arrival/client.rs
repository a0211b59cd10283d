//! Arrivals sub-client.

use crate::client::AliceClient;
use crate::domain::require_body;
use crate::error::SdkError;
use crate::http::RawResponse;
use serde_json::Value;

pub struct Arrivals<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Arrivals<'a> {
    /// Create a hotel arrival.
    pub async fn create(&self, hotel_id: i64, body: &Value) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self.client.http.create_arrival(hotel_id, body).await?)
    }

    /// Create hotel arrivals in bulk.
    pub async fn create_bulk(&self, hotel_id: i64, body: &Value) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self.client.http.create_bulk_arrivals(hotel_id, body).await?)
    }
}
