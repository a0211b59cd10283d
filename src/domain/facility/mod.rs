//! Facility domain — hotel sub-units (e.g. Concierge) exposing services.

pub mod client;
pub mod wire;

pub use client::Facilities;
pub use wire::{FacilityResponse, ServiceOptionResponse, ServiceResponse, CONCIERGE_FACILITY};
