//! Ticket domain — guest-service requests tracked through workflow statuses.

pub mod client;

pub use client::Tickets;
