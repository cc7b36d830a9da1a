//! Persona Core — the version history of persona configurations.
//!
//! Everything here is synchronous and single-threaded. Platform access
//! (storage, clock) goes through the traits in [`ports`].

pub mod ports;
pub mod event_bus;
pub mod live;
pub mod diff;
pub mod version_store;
