use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;

use serde::Deserialize;

/// The Bot API accepts roughly 30 messages per second per bot
pub const MIN_INTERVAL_MS: u64 = 35;
pub const MAX_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_INTERVAL_MS: u64 = 100;

pub const MIN_PROGRESS_EVERY: u64 = 1;
pub const MAX_PROGRESS_EVERY: u64 = 10_000;
pub const DEFAULT_PROGRESS_EVERY: u64 = 10;

/// Who may broadcast, and how fast a broadcast goes out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Chat ids allowed to start a broadcast
    pub operators: Vec<i64>,
    /// Minimum spacing between two delivery attempts
    pub min_interval_ms: u64,
    /// Post a progress update after this many recipients
    pub progress_every: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            operators: Vec::new(),
            min_interval_ms: DEFAULT_INTERVAL_MS,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.operators.is_empty() {
            return Err(ConfigError::broadcast(
                "broadcast.operators must list at least one operator id",
            ));
        }

        if self.min_interval_ms < MIN_INTERVAL_MS || self.min_interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::broadcast(format!(
                "broadcast.min_interval_ms must be {}-{}, got {}",
                MIN_INTERVAL_MS, MAX_INTERVAL_MS, self.min_interval_ms
            )));
        }

        if self.progress_every < MIN_PROGRESS_EVERY || self.progress_every > MAX_PROGRESS_EVERY {
            return Err(ConfigError::broadcast(format!(
                "broadcast.progress_every must be {}-{}, got {}",
                MIN_PROGRESS_EVERY, MAX_PROGRESS_EVERY, self.progress_every
            )));
        }

        Ok(())
    }
}

/// Comma separated operator ids, as given in `BCAST_BROADCAST_OPERATORS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperatorList(pub Vec<i64>);

impl FromStr for OperatorList {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(i64::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(OperatorList)
    }
}
