use serde::Deserialize;
use std::time::Duration;

/// Run parameters for a publishing session, resolved once at startup.
///
/// Field names match the environment variables the loader reads
/// (`REDIS_HOST`, `REDIS_PORT`, `PRODUCER_DURATION`, `PRODUCER_BATCH_SIZE`,
/// `PRODUCER_PRODUCE_INDEFINITELY`). Every value is required; there are no
/// defaults to fall back on.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Network address of the Redis broker.
    pub redis_host: String,

    /// Network port of the Redis broker.
    pub redis_port: u16,

    /// Total minutes to run before stopping. Ignored when
    /// `producer_produce_indefinitely` is set.
    pub producer_duration: u64,

    /// Number of messages published per batch. Must be greater than zero.
    pub producer_batch_size: usize,

    /// When true, the duration check is bypassed and the run only ends via
    /// an error or external termination.
    pub producer_produce_indefinitely: bool,
}

impl Settings {
    /// Connection URL for the configured broker.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    /// The configured run duration as a `Duration`.
    ///
    /// Saturates instead of overflowing for absurdly large minute counts.
    pub fn target_duration(&self) -> Duration {
        Duration::from_secs(self.producer_duration.saturating_mul(60))
    }
}
