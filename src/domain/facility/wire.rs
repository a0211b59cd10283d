//! Wire types for facility and service responses (REST).

use serde::{Deserialize, Serialize};

/// Facility name the catalog sync pivots on.
pub const CONCIERGE_FACILITY: &str = "Concierge";

/// Raw facility from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacilityResponse {
    pub id: i64,
    pub name: String,
}

/// A bookable offering under a facility, with configurable options/fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub options: Vec<ServiceOptionResponse>,
}

/// A configurable field on a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOptionResponse {
    pub id: i64,
    pub name: String,
}
