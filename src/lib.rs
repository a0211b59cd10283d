//! # Alice SDK
//!
//! A Rust client for the Alice hotel-operations staff REST API (`staff/v1`),
//! plus a catalog-sync engine for mirroring the Concierge service catalog
//! into an external document store.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Wire types, configuration, errors
//! 2. **HTTP API** — `AliceHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `AliceClient` with nested sub-clients
//! 4. **Sync** — `CatalogSync` against a pluggable `CatalogStore`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alice_sdk::prelude::*;
//!
//! let config = AliceConfig::new("https://api.aliceplatform.com", "key", "Basic …");
//! let client = AliceClient::builder().config(config).build()?;
//!
//! let hotel_ids = client.hotels().ids().await?;
//! let services = client.facilities().services(hotel_ids[0], 7).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Immutable client configuration, injected at construction.
pub mod config;

/// Domain modules (vertical slices): sub-clients and wire types.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `AliceClient` — the primary entry point.
pub mod client;

// ── Layer 4: Sync ────────────────────────────────────────────────────────────

/// Catalog sync engine and the document-store seam.
pub mod sync;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration
    pub use crate::config::AliceConfig;

    // Wire types
    pub use crate::domain::facility::wire::{
        FacilityResponse, ServiceOptionResponse, ServiceResponse, CONCIERGE_FACILITY,
    };
    pub use crate::domain::hotel::wire::HotelResponse;

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{
        AliceClient, AliceClientBuilder, ArrivalsClient, DashboardsClient, FacilitiesClient,
        HotelsClient, ReservationsClient, StaffClient, TicketsClient,
    };
    pub use crate::http::{RawResponse, RetryConfig, RetryPolicy};

    // Sync
    pub use crate::sync::{
        CatalogStore, CatalogSync, FieldMapRecord, MarketRecord, NewFieldMap, ServiceMapRecord,
        SkipReason, StoreError, SyncReport, SyncSkip,
    };
}
