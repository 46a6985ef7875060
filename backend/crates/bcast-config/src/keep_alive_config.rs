use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_KEEP_ALIVE_INTERVAL_SECS: u64 = 10;
pub const MAX_KEEP_ALIVE_INTERVAL_SECS: u64 = 86_400;
pub const DEFAULT_KEEP_ALIVE_INTERVAL_SECS: u64 = 300;

/// Periodic self-ping that keeps free-tier hosts from idling the process out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    pub enabled: bool,
    pub interval_secs: u64,
    /// URL to ping; defaults to `{server.public_url}/health`
    pub url: Option<String>,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_KEEP_ALIVE_INTERVAL_SECS,
            url: None,
        }
    }
}

impl KeepAliveConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled
            && (self.interval_secs < MIN_KEEP_ALIVE_INTERVAL_SECS
                || self.interval_secs > MAX_KEEP_ALIVE_INTERVAL_SECS)
        {
            return Err(ConfigError::config(format!(
                "keep_alive.interval_secs must be {}-{}, got {}",
                MIN_KEEP_ALIVE_INTERVAL_SECS, MAX_KEEP_ALIVE_INTERVAL_SECS, self.interval_secs
            )));
        }

        Ok(())
    }
}
