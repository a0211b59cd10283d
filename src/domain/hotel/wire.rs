//! Wire types for hotel responses (REST).

use serde::{Deserialize, Serialize};

/// Raw hotel from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelResponse {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
