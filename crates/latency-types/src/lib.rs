//! Shared wire types for the simulated latency data API.
//!
//! This crate defines every JSON shape that crosses the HTTP boundary:
//!
//! - [`FixtureType`] -- the four recognized fixture tags
//! - Fixture payloads ([`WeatherData`], [`NewsData`], [`StatsData`],
//!   [`ProfileData`]) and the [`FixtureData`] union over them
//! - [`ApiEnvelope`] -- the `{ type, delay, data }` response wrapper
//! - [`TestDelay`] -- the `{ delay, unit }` body of `/api/test`
//!
//! The server crate serializes these; the client crate deserializes them.

pub mod envelope;
pub mod fixtures;

pub use envelope::{ApiEnvelope, TestDelay, DELAY_UNIT};
pub use fixtures::{
    Article, EmptyData, FixtureData, FixtureType, NewsData, ProfileData, Stats, StatsData,
    WeatherData,
};
