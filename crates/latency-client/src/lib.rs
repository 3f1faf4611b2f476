//! Caller-side data helpers for the simulated latency API.
//!
//! Pages that demonstrate fetching patterns need slow, predictable data.
//! This crate provides it three ways:
//!
//! - [`LatencyClient::fetch_fixture`] calls `/api/v1/{delay}/{type}` with a
//!   random delay and decodes the typed envelope
//! - [`LatencyClient::get_pokemon`] looks up a Pokemon on `PokeAPI`,
//!   swallowing every failure into `None`
//! - [`simulated`] loaders wait locally without any network at all

pub mod client;
pub mod config;
pub mod error;
pub mod pokemon;
pub mod simulated;

pub use client::{random_fetch_delay, LatencyClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use pokemon::{random_pokemon_id, Pokemon};
