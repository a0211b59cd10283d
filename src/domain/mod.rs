//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains a `client.rs` sub-client; domains the SDK itself
//! consumes fields from (hotels, facilities) also carry `wire.rs` serde
//! structs. Pass-through endpoints return `serde_json::Value`.

pub mod arrival;
pub mod dashboard;
pub mod facility;
pub mod hotel;
pub mod reservation;
pub mod staff;
pub mod ticket;

use crate::error::SdkError;
use serde_json::Value;

/// Precondition for create/update calls: an empty body never reaches the
/// network.
pub(crate) fn require_body(body: &Value) -> Result<(), SdkError> {
    let empty = match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Err(SdkError::Validation(
            "empty JSON body: nothing to create or update".to_string(),
        ));
    }
    Ok(())
}
