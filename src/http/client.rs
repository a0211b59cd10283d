//! Low-level HTTP client — `AliceHttp`.
//!
//! One method per staff-API endpoint. GET methods decode JSON; POST/PUT
//! methods return a [`RawResponse`] handle. Internal to the SDK — the
//! high-level client wraps this.

use crate::config::AliceConfig;
use crate::domain::facility::wire::{FacilityResponse, ServiceResponse};
use crate::domain::hotel::wire::HotelResponse;
use crate::error::{ConfigError, HttpError, SdkError};
use crate::http::response::RawResponse;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::STAFF_PREFIX;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Low-level HTTP client for the Alice staff REST API.
#[derive(Clone)]
pub struct AliceHttp {
    base_url: String,
    api_key: String,
    client: Client,
    /// Base retry timing; per-call policies derive from this.
    retry: RetryConfig,
}

impl AliceHttp {
    pub fn new(config: AliceConfig, retry: RetryConfig) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let auth = HeaderValue::from_str(&config.authorization)
            .map_err(|e| ConfigError::InvalidAuthorization(e.to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::Http(HttpError::Transport(e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client,
            retry,
        })
    }

    fn staff_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, STAFF_PREFIX, path)
    }

    // ── Hotels ───────────────────────────────────────────────────────────

    pub async fn get_hotels(&self) -> Result<Vec<HotelResponse>, HttpError> {
        let url = self.staff_url("hotels");
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Facilities ───────────────────────────────────────────────────────

    /// Upstream spells the facilities *list* segment `facilites`; nested
    /// paths use `facilities`. Both spellings are the wire contract.
    pub async fn get_hotel_facilities(
        &self,
        hotel_id: i64,
    ) -> Result<Vec<FacilityResponse>, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/facilites"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_facility_services(
        &self,
        hotel_id: i64,
        facility_id: i64,
    ) -> Result<Vec<ServiceResponse>, HttpError> {
        let url = self.staff_url(&format!(
            "hotels/{hotel_id}/facilities/{facility_id}/services"
        ));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_facility_menus(
        &self,
        hotel_id: i64,
        facility_id: i64,
    ) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/facilities/{facility_id}/menus"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Arrivals ─────────────────────────────────────────────────────────

    pub async fn create_arrival(
        &self,
        hotel_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/arrivals"));
        self.post(&url, body, RetryPolicy::Transient).await
    }

    pub async fn create_bulk_arrivals(
        &self,
        hotel_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/arrivals/bulk"));
        self.post(&url, body, RetryPolicy::Transient).await
    }

    // ── Workflow statuses / users ────────────────────────────────────────

    pub async fn get_workflow_statuses(&self, hotel_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/workflowStatuses"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_users(&self, hotel_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/users"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Reservations ─────────────────────────────────────────────────────

    pub async fn get_reservations(&self, hotel_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/reservations"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_reservation(
        &self,
        hotel_id: i64,
        reservation_id: i64,
    ) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/reservations/{reservation_id}"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn create_reservation(
        &self,
        hotel_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/reservations"));
        self.post(&url, body, RetryPolicy::Transient).await
    }

    pub async fn update_reservation(
        &self,
        hotel_id: i64,
        reservation_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/reservations/{reservation_id}"));
        self.put(&url, body, RetryPolicy::Transient).await
    }

    // ── Dashboards ───────────────────────────────────────────────────────

    pub async fn get_dashboards(&self, hotel_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/dashboards"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_dashboard_data_sets(
        &self,
        hotel_id: i64,
        dashboard_id: i64,
    ) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/dashboards/{dashboard_id}/dataSets"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Tickets ──────────────────────────────────────────────────────────

    pub async fn get_tickets(&self, hotel_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_ticket(&self, hotel_id: i64, ticket_id: i64) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn update_ticket(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}"));
        self.put(&url, body, RetryPolicy::Transient).await
    }

    pub async fn get_ticket_messages(
        &self,
        hotel_id: i64,
        ticket_id: i64,
    ) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/messages"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_ticket_transitions(
        &self,
        hotel_id: i64,
        ticket_id: i64,
    ) -> Result<Value, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/transitions"));
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn update_ticket_menu_order(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/menuOrder"));
        self.put(&url, body, RetryPolicy::Transient).await
    }

    pub async fn update_ticket_service_request(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/serviceRequest"));
        self.put(&url, body, RetryPolicy::Transient).await
    }

    pub async fn update_ticket_workflow_status(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/workflowStatus"));
        self.put(&url, body, RetryPolicy::Transient).await
    }

    pub async fn create_offline_request(
        &self,
        hotel_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/offlineRequest"));
        self.post(&url, body, RetryPolicy::Transient).await
    }

    pub async fn create_ticket_service_request(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, HttpError> {
        let url = self.staff_url(&format!("hotels/{hotel_id}/tickets/{ticket_id}/serviceRequest"));
        self.post(&url, body, RetryPolicy::Transient).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let raw = self.execute(Method::GET, url, None, retry).await?;
        raw.json().map_err(HttpError::Decode)
    }

    async fn post(
        &self,
        url: &str,
        body: &Value,
        retry: RetryPolicy,
    ) -> Result<RawResponse, HttpError> {
        self.execute(Method::POST, url, Some(body), retry).await
    }

    async fn put(
        &self,
        url: &str,
        body: &Value,
        retry: RetryPolicy,
    ) -> Result<RawResponse, HttpError> {
        self.execute(Method::PUT, url, Some(body), retry).await
    }

    fn resolve_retry(&self, policy: RetryPolicy) -> Option<RetryConfig> {
        match policy {
            RetryPolicy::None => None,
            RetryPolicy::Transient => Some(self.retry.transient()),
            RetryPolicy::Idempotent => Some(self.retry.idempotent()),
            RetryPolicy::Custom(config) => Some(config),
        }
    }

    /// Perform one logical request with bounded retry. Pending → Success,
    /// or Retrying → Pending until the attempt budget runs out → Failed.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        retry: RetryPolicy,
    ) -> Result<RawResponse, HttpError> {
        let config = match self.resolve_retry(retry) {
            Some(config) => config,
            None => return self.do_request(&method, url, body).await,
        };

        let max_attempts = config.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.do_request(&method, url, body).await {
                Ok(raw) => return Ok(raw),
                Err(e) => {
                    let retryable = match &e {
                        HttpError::Transport(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if config.retryable_statuses.contains(&429) {
                                if let Some(ms) = retry_after_ms {
                                    // Server-suggested waits are capped at the
                                    // configured max delay.
                                    let wait =
                                        Duration::from_millis(*ms).min(config.max_delay);
                                    futures_timer::Delay::new(wait).await;
                                }
                                true
                            } else {
                                false
                            }
                        }
                        _ => false,
                    };

                    if !retryable {
                        return Err(e);
                    }

                    last_error = Some(e);
                    if attempt < max_attempts {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt,
                            max = max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            "retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                }
            }
        }

        Err(HttpError::RequestFailed {
            url: url.to_string(),
            attempts: max_attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// One attempt. Error statuses map to typed failures, never a silent
    /// pass-through.
    async fn do_request(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .query(&[("apikey", self.api_key.as_str())]);

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_redirect() => {
                return Err(HttpError::Redirect {
                    url: url.to_string(),
                })
            }
            Err(e) => return Err(HttpError::Transport(e)),
        };

        let raw = RawResponse::read(resp).await.map_err(HttpError::Transport)?;
        let status = raw.status();

        if status.is_success() {
            return Ok(raw);
        }

        match status.as_u16() {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(raw.into_body())),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: raw
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(|secs| secs.saturating_mul(1000)),
            }),
            400..=499 => Err(HttpError::BadRequest(raw.into_body())),
            code => Err(HttpError::ServerError {
                status: code,
                body: raw.into_body(),
            }),
        }
    }
}
