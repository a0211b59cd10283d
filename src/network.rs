//! Network URL constants for the Alice SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.aliceplatform.com";

/// Path prefix for the staff API surface.
pub const STAFF_PREFIX: &str = "staff/v1";
