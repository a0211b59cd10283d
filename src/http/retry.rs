//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt, no retries.
    None,
    /// Retry transport failures only. Default for POST/PUT endpoints, where
    /// re-sending after a definitive server answer is not safe.
    #[default]
    Transient,
    /// Retry transport failures plus 429/500/502/503/504, with backoff on
    /// 429. Default for GET endpoints.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempt budget, counting the initial request. A value of 1
    /// means no retries.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Keep the timing parameters but retry only transport failures.
    pub fn transient(&self) -> Self {
        Self {
            retryable_statuses: Vec::new(),
            ..self.clone()
        }
    }

    /// Keep the timing parameters and retry rate limits and server errors
    /// too. Safe for idempotent (GET) requests.
    pub fn idempotent(&self) -> Self {
        Self {
            retryable_statuses: vec![429, 500, 502, 503, 504],
            ..self.clone()
        }
    }

    /// Calculate the delay after a failed attempt (1-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(exponent as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
