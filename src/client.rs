//! High-level client — `AliceClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::AliceConfig;
use crate::domain::arrival::client::Arrivals;
use crate::domain::dashboard::client::Dashboards;
use crate::domain::facility::client::Facilities;
use crate::domain::hotel::client::Hotels;
use crate::domain::reservation::client::Reservations;
use crate::domain::staff::client::Staff;
use crate::domain::ticket::client::Tickets;
use crate::error::SdkError;
use crate::http::{AliceHttp, RetryConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::arrival::client::Arrivals as ArrivalsClient;
pub use crate::domain::dashboard::client::Dashboards as DashboardsClient;
pub use crate::domain::facility::client::Facilities as FacilitiesClient;
pub use crate::domain::hotel::client::Hotels as HotelsClient;
pub use crate::domain::reservation::client::Reservations as ReservationsClient;
pub use crate::domain::staff::client::Staff as StaffClient;
pub use crate::domain::ticket::client::Tickets as TicketsClient;

/// The primary entry point for the Alice SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.hotels()`, `client.tickets()`, etc.
#[derive(Clone)]
pub struct AliceClient {
    pub(crate) http: AliceHttp,
}

impl AliceClient {
    pub fn builder() -> AliceClientBuilder {
        AliceClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn hotels(&self) -> Hotels<'_> {
        Hotels { client: self }
    }

    pub fn facilities(&self) -> Facilities<'_> {
        Facilities { client: self }
    }

    pub fn arrivals(&self) -> Arrivals<'_> {
        Arrivals { client: self }
    }

    pub fn reservations(&self) -> Reservations<'_> {
        Reservations { client: self }
    }

    pub fn tickets(&self) -> Tickets<'_> {
        Tickets { client: self }
    }

    pub fn dashboards(&self) -> Dashboards<'_> {
        Dashboards { client: self }
    }

    pub fn staff(&self) -> Staff<'_> {
        Staff { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct AliceClientBuilder {
    config: Option<AliceConfig>,
    retry: Option<RetryConfig>,
}

impl AliceClientBuilder {
    /// Inject an explicit configuration. Without one, `build` falls back to
    /// [`AliceConfig::from_env`].
    pub fn config(mut self, config: AliceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the base retry timing for all requests.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Override just the total attempt budget.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        let mut retry = self.retry.unwrap_or_default();
        retry.max_attempts = max_attempts;
        self.retry = Some(retry);
        self
    }

    pub fn build(self) -> Result<AliceClient, SdkError> {
        let config = match self.config {
            Some(config) => config,
            None => AliceConfig::from_env()?,
        };
        let retry = self.retry.unwrap_or_default();

        Ok(AliceClient {
            http: AliceHttp::new(config, retry)?,
        })
    }
}
