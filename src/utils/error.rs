//! The `error` module defines the error types used within the `pubload`
//! application.
//!
//! Every failure that can occur during a publish cycle funnels into
//! [`PublishError`], so the publish loop handles all of them with a single
//! check at its boundary.

use std::time::Duration;
use thiserror::Error;

/// A failure while constructing or submitting a batch.
///
/// The loop does not distinguish between causes: any variant aborts the run
/// and falls through to final reporting.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The broker rejected the batch or the connection failed mid-run.
    #[error("broker error: {0}")]
    Broker(#[from] redis::RedisError),

    /// A message payload could not be serialized.
    #[error("failed to serialize message payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The batch submission did not complete within the deadline.
    #[error("batch submission timed out after {0:?}")]
    Timeout(Duration),
}
