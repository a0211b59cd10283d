//! Reservation domain.

pub mod client;

pub use client::Reservations;
