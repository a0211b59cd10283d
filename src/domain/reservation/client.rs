//! Reservations sub-client.

use crate::client::AliceClient;
use crate::domain::require_body;
use crate::error::SdkError;
use crate::http::RawResponse;
use serde_json::Value;

pub struct Reservations<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Reservations<'a> {
    /// Load reservations for the given hotel.
    pub async fn all(&self, hotel_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_reservations(hotel_id).await?)
    }

    /// Load a single reservation.
    pub async fn get(&self, hotel_id: i64, reservation_id: i64) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_reservation(hotel_id, reservation_id)
            .await?)
    }

    /// Create a reservation.
    pub async fn create(&self, hotel_id: i64, body: &Value) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self.client.http.create_reservation(hotel_id, body).await?)
    }

    /// Update a reservation.
    pub async fn update(
        &self,
        hotel_id: i64,
        reservation_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .update_reservation(hotel_id, reservation_id, body)
            .await?)
    }
}
