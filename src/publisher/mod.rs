//! The `publisher` module is the heart of the load generator: it owns the
//! broker connection, builds batches of uniquely-identified messages, and
//! drives the timed publish loop.
//!
//! The broker is reached through the [`PublishSink`] trait so the loop can
//! be exercised in tests without a live Redis instance; [`RedisSink`] is the
//! production implementation.

pub mod message;


use rand::Rng;
use redis::aio::MultiplexedConnection;
use std::time::Duration;
use tokio::time::{Instant, sleep, timeout};
use tracing::{error, info};

use crate::utils::error::PublishError;

pub use message::Message;

/// The pub/sub channel every message is published to.
pub const PUBLISH_CHANNEL: &str = "messages:published";

/// Deadline applied to each batch submission so an unresponsive broker
/// surfaces as an error instead of wedging the process.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// A connection capable of submitting a batch of payloads to a pub/sub
/// channel as one atomic round trip.
pub trait PublishSink {
    /// Publishes every payload to `channel` in order, all-or-nothing.
    fn publish_batch(
        &mut self,
        channel: &str,
        payloads: &[String],
    ) -> impl Future<Output = Result<(), PublishError>>;
}

/// Production sink: a single multiplexed Redis connection, opened once and
/// reused for every batch.
pub struct RedisSink {
    conn: MultiplexedConnection,
}

impl RedisSink {
    /// Opens the one connection the run will use. Failure here is fatal to
    /// the caller; there is no retry.
    pub async fn connect(url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn })
    }
}

impl PublishSink for RedisSink {
    async fn publish_batch(
        &mut self,
        channel: &str,
        payloads: &[String],
    ) -> Result<(), PublishError> {
        let mut pipe = redis::pipe();
        pipe.atomic();
        for payload in payloads {
            pipe.cmd("PUBLISH").arg(channel).arg(payload).ignore();
        }
        let () = pipe.query_async(&mut self.conn).await?;
        Ok(())
    }
}

/// Totals accumulated over one run, reported once when the loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total_messages: u64,
}

/// Runs the publish loop until the duration budget is exhausted, or forever
/// when `indefinite` is set.
///
/// Each cycle builds exactly `batch_size` fresh messages, submits them as
/// one atomic pipeline, and sleeps a random jitter before re-checking the
/// clock. Any error while building or submitting a batch ends the run: it is
/// logged and the loop breaks, so the stats accumulated so far are still
/// returned on every exit path.
pub async fn run_publisher<S: PublishSink>(
    sink: &mut S,
    batch_size: usize,
    target: Duration,
    indefinite: bool,
) -> RunStats {
    let start = Instant::now();
    let mut stats = RunStats::default();

    while indefinite || start.elapsed() < target {
        info!("Sending {batch_size} messages");
        if let Err(e) = submit_batch(sink, batch_size).await {
            error!("Publish cycle failed: {e}");
            break;
        }
        stats.total_messages += batch_size as u64;
        info!("Sent {batch_size} messages");

        sleep(jitter()).await;
    }

    stats
}

/// Builds one batch of freshly-identified payloads and submits it under the
/// per-call deadline. All failure modes collapse into `PublishError`.
async fn submit_batch<S: PublishSink>(
    sink: &mut S,
    batch_size: usize,
) -> Result<(), PublishError> {
    let payloads = build_batch(batch_size)?;

    timeout(SUBMIT_TIMEOUT, sink.publish_batch(PUBLISH_CHANNEL, &payloads))
        .await
        .map_err(|_| PublishError::Timeout(SUBMIT_TIMEOUT))?
}

fn build_batch(batch_size: usize) -> Result<Vec<String>, serde_json::Error> {
    (0..batch_size).map(|_| Message::new().to_payload()).collect()
}

/// Inter-batch pacing delay, drawn uniformly from [0.1, 0.5) seconds so
/// publishes do not land in lockstep against the broker.
pub fn jitter() -> Duration {
    Duration::from_secs_f64(rand::rng().random_range(0.1..0.5))
}
