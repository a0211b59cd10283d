//! Catalog sync engine against a mocked Alice API and an in-memory store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alice_sdk::prelude::*;
use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// In-memory document store. Duplicate market rows make lookups ambiguous,
/// matching the hosted store's unique-query semantics.
#[derive(Default)]
struct MemoryStore {
    markets: Vec<MarketRecord>,
    service_maps: Vec<ServiceMapRecord>,
    field_maps: Mutex<Vec<FieldMapRecord>>,
    next_id: AtomicUsize,
}

impl MemoryStore {
    fn field_count(&self) -> usize {
        self.field_maps.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn market_for_hotel(
        &self,
        hotel_number: &str,
    ) -> Result<Option<MarketRecord>, StoreError> {
        let matches: Vec<_> = self
            .markets
            .iter()
            .filter(|m| m.hotel_number == hotel_number)
            .collect();
        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches[0].clone())),
            n => Err(StoreError::Ambiguous(format!(
                "{n} markets for hotel {hotel_number}"
            ))),
        }
    }

    async fn service_map(
        &self,
        market_id: &str,
        alice_service_id: &str,
    ) -> Result<Option<ServiceMapRecord>, StoreError> {
        Ok(self
            .service_maps
            .iter()
            .find(|s| s.market_id == market_id && s.alice_service_id == alice_service_id)
            .cloned())
    }

    async fn field_map(
        &self,
        service_map_id: &str,
        alice_field_id: &str,
    ) -> Result<Option<FieldMapRecord>, StoreError> {
        Ok(self
            .field_maps
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.service_map_id == service_map_id && f.alice_field_id == alice_field_id)
            .cloned())
    }

    async fn create_field_map(&self, field: NewFieldMap) -> Result<FieldMapRecord, StoreError> {
        let id = format!("fm{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = FieldMapRecord {
            id,
            service_map_id: field.service_map_id,
            alice_service_id: field.alice_service_id,
            alice_field_id: field.alice_field_id,
            alice_field_name: field.alice_field_name,
        };
        self.field_maps.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 7}, {"id": 8}, {"id": 9}])),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels/7/facilites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 70, "name": "Concierge"},
            {"id": 71, "name": "Spa"}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels/8/facilites"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 80, "name": "Spa"}])),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels/9/facilites"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 90, "name": "Concierge"}])),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels/7/facilities/70/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 700,
            "name": "Luggage assistance",
            "options": [
                {"id": 7001, "name": "Bag count"},
                {"id": 7002, "name": "Pickup time"}
            ]
        }])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels/9/facilities/90/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 900,
            "name": "Wake-up call",
            "options": [{"id": 9001, "name": "Time"}]
        }])))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> AliceClient {
    AliceClient::builder()
        .config(AliceConfig::new(server.uri(), "test-key", "Basic dGVzdA=="))
        .build()
        .expect("client should build")
}

fn seeded_store() -> MemoryStore {
    MemoryStore {
        markets: vec![MarketRecord {
            id: "m1".to_string(),
            hotel_number: "7".to_string(),
        }],
        service_maps: vec![ServiceMapRecord {
            id: "sm1".to_string(),
            market_id: "m1".to_string(),
            alice_service_id: "700".to_string(),
        }],
        ..MemoryStore::default()
    }
}

#[tokio::test]
async fn sync_creates_field_maps_and_reports_skips() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let client = client_for(&server);
    let store = seeded_store();

    let report = CatalogSync::new(&client, &store).run().await.expect("sync runs");

    assert_eq!(report.hotels_seen, 3);
    assert_eq!(report.services_seen, 2);
    assert_eq!(report.fields_created, 2);
    assert_eq!(store.field_count(), 2);

    assert_eq!(report.skips.len(), 2);
    assert!(report.skips.contains(&SyncSkip {
        hotel_id: 8,
        service_id: None,
        reason: SkipReason::NoConciergeFacility,
    }));
    assert!(report.skips.contains(&SyncSkip {
        hotel_id: 9,
        service_id: Some(900),
        reason: SkipReason::MarketNotFound,
    }));
}

#[tokio::test]
async fn rerun_against_unchanged_catalog_creates_nothing() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let client = client_for(&server);
    let store = seeded_store();
    let sync = CatalogSync::new(&client, &store);

    let first = sync.run().await.expect("first run");
    assert_eq!(first.fields_created, 2);

    let second = sync.run().await.expect("second run");
    assert_eq!(second.fields_created, 0);
    assert_eq!(store.field_count(), 2);
}

#[tokio::test]
async fn ambiguous_market_lookup_is_reported_not_fatal() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut store = seeded_store();
    store.markets.push(MarketRecord {
        id: "m1-dup".to_string(),
        hotel_number: "7".to_string(),
    });

    let client = client_for(&server);
    let report = CatalogSync::new(&client, &store).run().await.expect("sync runs");

    assert_eq!(report.fields_created, 0);
    assert!(report.skips.iter().any(|s| s.hotel_id == 7
        && s.service_id == Some(700)
        && matches!(s.reason, SkipReason::AmbiguousLookup(_))));
}

#[tokio::test]
async fn missing_service_map_skips_service() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let store = MemoryStore {
        markets: vec![MarketRecord {
            id: "m1".to_string(),
            hotel_number: "7".to_string(),
        }],
        ..MemoryStore::default()
    };

    let client = client_for(&server);
    let report = CatalogSync::new(&client, &store).run().await.expect("sync runs");

    assert_eq!(report.fields_created, 0);
    assert!(report.skips.contains(&SyncSkip {
        hotel_id: 7,
        service_id: Some(700),
        reason: SkipReason::ServiceMapNotFound,
    }));
}
