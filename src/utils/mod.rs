//! The `utils` module provides common definitions used across the `pubload`
//! application: the publish error type and logging setup.

pub mod error;
pub mod logging;
