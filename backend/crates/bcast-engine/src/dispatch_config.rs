use bcast_config::BroadcastConfig;

use std::time::Duration;

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_PROGRESS_EVERY: u64 = 10;

/// Pacing and reporting knobs for a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Minimum spacing between consecutive delivery attempts. Zero disables pacing.
    pub min_interval: Duration,
    /// Emit a progress snapshot after every this many recipients. Zero disables progress.
    pub progress_every: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl From<&BroadcastConfig> for DispatchConfig {
    fn from(config: &BroadcastConfig) -> Self {
        Self {
            min_interval: Duration::from_millis(config.min_interval_ms),
            progress_every: config.progress_every,
        }
    }
}
