//! Dashboard domain.

pub mod client;

pub use client::Dashboards;
