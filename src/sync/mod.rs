//! Catalog sync engine — pulls the Concierge service catalog per hotel and
//! upserts service/field mapping records into a [`CatalogStore`].
//!
//! Lookup misses never abort the run: they become typed entries in the
//! [`SyncReport`] and a `tracing::warn!`, and the caller decides on recovery.
//! Transport and store backend failures propagate.

pub mod store;

pub use store::{
    CatalogStore, FieldMapRecord, MarketRecord, NewFieldMap, ServiceMapRecord, StoreError,
};

use crate::client::AliceClient;
use crate::domain::facility::wire::ServiceResponse;
use crate::error::{HttpError, SdkError};
use std::fmt;

/// Why a hotel or service was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    NoConciergeFacility,
    MarketNotFound,
    ServiceMapNotFound,
    AmbiguousLookup(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoConciergeFacility => write!(f, "no Concierge facility"),
            SkipReason::MarketNotFound => write!(f, "no market record for hotel"),
            SkipReason::ServiceMapNotFound => write!(f, "no service map for service"),
            SkipReason::AmbiguousLookup(detail) => write!(f, "ambiguous lookup: {detail}"),
        }
    }
}

/// A skipped unit of work, kept for the caller to act on.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSkip {
    pub hotel_id: i64,
    pub service_id: Option<i64>,
    pub reason: SkipReason,
}

/// Tallies for one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub hotels_seen: usize,
    pub services_seen: usize,
    pub fields_created: usize,
    pub skips: Vec<SyncSkip>,
}

/// One-shot sync of the service/field catalog into the store.
pub struct CatalogSync<'a, S: CatalogStore> {
    client: &'a AliceClient,
    store: &'a S,
}

impl<'a, S: CatalogStore> CatalogSync<'a, S> {
    pub fn new(client: &'a AliceClient, store: &'a S) -> Self {
        Self { client, store }
    }

    /// Walk every hotel's Concierge services and get-or-create field maps.
    /// Re-running against an unchanged catalog creates nothing.
    pub async fn run(&self) -> Result<SyncReport, SdkError> {
        let mut report = SyncReport::default();
        let hotel_ids = self.client.hotels().ids().await?;

        for hotel_id in hotel_ids {
            report.hotels_seen += 1;

            let facility_id = match self.client.facilities().concierge_id(hotel_id).await {
                Ok(id) => id,
                Err(SdkError::Http(HttpError::NotFound(_))) => {
                    tracing::warn!(hotel_id, "skipping hotel: no Concierge facility");
                    report.skips.push(SyncSkip {
                        hotel_id,
                        service_id: None,
                        reason: SkipReason::NoConciergeFacility,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let services = self.client.facilities().services(hotel_id, facility_id).await?;
            for service in &services {
                report.services_seen += 1;
                self.sync_service(hotel_id, service, &mut report).await?;
            }
        }

        Ok(report)
    }

    async fn sync_service(
        &self,
        hotel_id: i64,
        service: &ServiceResponse,
        report: &mut SyncReport,
    ) -> Result<(), SdkError> {
        let hotel_number = hotel_id.to_string();
        let service_id = service.id.to_string();

        let market = match self.store.market_for_hotel(&hotel_number).await {
            Ok(Some(market)) => market,
            Ok(None) => {
                tracing::warn!(hotel_id, service_id = %service_id, "skipping service: no market record");
                report.skips.push(SyncSkip {
                    hotel_id,
                    service_id: Some(service.id),
                    reason: SkipReason::MarketNotFound,
                });
                return Ok(());
            }
            Err(StoreError::Ambiguous(detail)) => {
                tracing::warn!(hotel_id, service_id = %service_id, %detail, "skipping service: ambiguous market lookup");
                report.skips.push(SyncSkip {
                    hotel_id,
                    service_id: Some(service.id),
                    reason: SkipReason::AmbiguousLookup(detail),
                });
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let service_map = match self.store.service_map(&market.id, &service_id).await {
            Ok(Some(map)) => map,
            Ok(None) => {
                tracing::warn!(hotel_id, service_id = %service_id, "skipping service: no service map");
                report.skips.push(SyncSkip {
                    hotel_id,
                    service_id: Some(service.id),
                    reason: SkipReason::ServiceMapNotFound,
                });
                return Ok(());
            }
            Err(StoreError::Ambiguous(detail)) => {
                tracing::warn!(hotel_id, service_id = %service_id, %detail, "skipping service: ambiguous service map lookup");
                report.skips.push(SyncSkip {
                    hotel_id,
                    service_id: Some(service.id),
                    reason: SkipReason::AmbiguousLookup(detail),
                });
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for option in &service.options {
            let field_id = option.id.to_string();
            let existing = self.store.field_map(&service_map.id, &field_id).await?;
            if existing.is_none() {
                self.store
                    .create_field_map(NewFieldMap {
                        service_map_id: service_map.id.clone(),
                        alice_service_id: service_id.clone(),
                        alice_field_id: field_id,
                        alice_field_name: option.name.clone(),
                    })
                    .await?;
                report.fields_created += 1;
            }
        }

        Ok(())
    }
}
