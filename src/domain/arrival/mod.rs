//! Arrival domain — guest arrival records.

pub mod client;

pub use client::Arrivals;
