//! Hotels sub-client.

use crate::client::AliceClient;
use crate::domain::hotel::wire::HotelResponse;
use crate::error::SdkError;

pub struct Hotels<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Hotels<'a> {
    /// Load all hotels the current user can interact with.
    pub async fn all(&self) -> Result<Vec<HotelResponse>, SdkError> {
        Ok(self.client.http.get_hotels().await?)
    }

    /// Hotel ids only.
    pub async fn ids(&self) -> Result<Vec<i64>, SdkError> {
        let hotels = self.all().await?;
        Ok(hotels.into_iter().map(|h| h.id).collect())
    }
}
