//! Facilities sub-client — facilities, services, menus.

use crate::client::AliceClient;
use crate::domain::facility::wire::{FacilityResponse, ServiceResponse, CONCIERGE_FACILITY};
use crate::error::{HttpError, SdkError};
use serde_json::Value;

pub struct Facilities<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Facilities<'a> {
    /// Load facilities for the given hotel.
    pub async fn for_hotel(&self, hotel_id: i64) -> Result<Vec<FacilityResponse>, SdkError> {
        Ok(self.client.http.get_hotel_facilities(hotel_id).await?)
    }

    /// Resolve the hotel's Concierge facility id.
    ///
    /// A hotel without a Concierge facility is a `NotFound` error, not a
    /// panic — callers (the catalog sync) decide whether to skip.
    pub async fn concierge_id(&self, hotel_id: i64) -> Result<i64, SdkError> {
        let facilities = self.for_hotel(hotel_id).await?;
        facilities
            .into_iter()
            .find(|f| f.name == CONCIERGE_FACILITY)
            .map(|f| f.id)
            .ok_or_else(|| {
                SdkError::Http(HttpError::NotFound(format!(
                    "no {CONCIERGE_FACILITY} facility for hotel {hotel_id}"
                )))
            })
    }

    /// Load services for a facility.
    pub async fn services(
        &self,
        hotel_id: i64,
        facility_id: i64,
    ) -> Result<Vec<ServiceResponse>, SdkError> {
        Ok(self
            .client
            .http
            .get_facility_services(hotel_id, facility_id)
            .await?)
    }

    /// Load menus for a facility.
    pub async fn menus(&self, hotel_id: i64, facility_id: i64) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_facility_menus(hotel_id, facility_id)
            .await?)
    }
}
