//! Catalog store seam — the external document store behind a trait.
//!
//! Records are keyed by externally-assigned ids; the SDK never invents them.

use async_trait::async_trait;
use thiserror::Error;

/// A market record mapping an Alice hotel to a store-side market.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRecord {
    pub id: String,
    pub hotel_number: String,
}

/// A service-map record tying an Alice service to a market.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceMapRecord {
    pub id: String,
    pub market_id: String,
    pub alice_service_id: String,
}

/// A field-map record tying a service option to a service map.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapRecord {
    pub id: String,
    pub service_map_id: String,
    pub alice_service_id: String,
    pub alice_field_id: String,
    pub alice_field_name: String,
}

/// Payload for creating a field map.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFieldMap {
    pub service_map_id: String,
    pub alice_service_id: String,
    pub alice_field_id: String,
    pub alice_field_name: String,
}

/// Document-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A lookup that must be unique returned multiple records.
    #[error("ambiguous lookup: {0}")]
    Ambiguous(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// The external document store the catalog sync upserts into.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Find the market record for an Alice hotel number.
    async fn market_for_hotel(&self, hotel_number: &str)
        -> Result<Option<MarketRecord>, StoreError>;

    /// Find the service map for a market + Alice service id.
    async fn service_map(
        &self,
        market_id: &str,
        alice_service_id: &str,
    ) -> Result<Option<ServiceMapRecord>, StoreError>;

    /// Find the field map for a service map + Alice field id.
    async fn field_map(
        &self,
        service_map_id: &str,
        alice_field_id: &str,
    ) -> Result<Option<FieldMapRecord>, StoreError>;

    /// Create a field map.
    async fn create_field_map(&self, field: NewFieldMap) -> Result<FieldMapRecord, StoreError>;
}
