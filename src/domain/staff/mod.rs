//! Staff domain — hotel users and workflow statuses.

pub mod client;

pub use client::Staff;
