//! Slow local loaders that need no server.
//!
//! These stand in for a database call that takes a while. They only wait
//! and return random sample data.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How long [`get_data`] waits.
pub const DATA_DELAY: Duration = Duration::from_secs(2);

/// How long [`get_data_longer`] waits.
pub const LONGER_DATA_DELAY: Duration = Duration::from_secs(5);

/// Exclusive upper bound for generated ids and values.
const VALUE_BOUND: u32 = 1000;

/// A sample record returned by [`get_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRecord {
    /// Random id in `0..1000`.
    pub id: u32,
    /// Always `John Doe`.
    pub name: String,
}

/// Wait two seconds, then return a record with a random id.
pub async fn get_data() -> DemoRecord {
    tokio::time::sleep(DATA_DELAY).await;
    DemoRecord {
        id: rand::rng().random_range(0..VALUE_BOUND),
        name: String::from("John Doe"),
    }
}

/// Wait five seconds, then return a random number in `0..1000`.
pub async fn get_data_longer() -> u32 {
    tokio::time::sleep(LONGER_DATA_DELAY).await;
    rand::rng().random_range(0..VALUE_BOUND)
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn get_data_waits_two_seconds() {
        let start = Instant::now();
        let record = get_data().await;
        assert!(start.elapsed() >= DATA_DELAY);
        assert!(record.id < VALUE_BOUND);
        assert_eq!(record.name, "John Doe");
    }

    #[tokio::test(start_paused = true)]
    async fn get_data_longer_waits_five_seconds() {
        let start = Instant::now();
        let value = get_data_longer().await;
        assert!(start.elapsed() >= LONGER_DATA_DELAY);
        assert!(value < VALUE_BOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn loaders_run_concurrently() {
        let start = Instant::now();
        let (record, value) = tokio::join!(get_data(), get_data_longer());
        let elapsed = start.elapsed();
        assert!(elapsed >= LONGER_DATA_DELAY);
        assert!(elapsed < LONGER_DATA_DELAY.saturating_add(DATA_DELAY));
        assert!(record.id < VALUE_BOUND);
        assert!(value < VALUE_BOUND);
    }
}
