use std::str::FromStr;
use tracing::Level;

/// Install the global tracing subscriber at the given level.
///
/// Unrecognized level strings fall back to `info`. Safe to call more than
/// once; later calls are no-ops, which keeps tests that share a process from
/// panicking.
pub fn init(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
