//! Hotel domain — the hotels a staff user can interact with.

pub mod client;
pub mod wire;

pub use client::Hotels;
pub use wire::HotelResponse;
