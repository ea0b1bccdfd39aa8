//! # Pubload
//!
//! `pubload` is a synthetic load generator for Redis pub/sub channels. It
//! connects to a broker once, then publishes batches of uniquely-identified
//! JSON messages as atomic pipelines at a jittered cadence until a duration
//! budget runs out (or forever, when configured to run indefinitely), and
//! reports the total number of messages published when the run ends.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `config`: Loads and validates the run parameters from the environment.
//! - `publisher`: The publish loop, the message payload, and the broker sink.
//! - `utils`: Shared utilities, such as error types and logging setup.

pub mod config;
pub mod publisher;
pub mod utils;
