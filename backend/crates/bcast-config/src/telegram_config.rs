use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const MIN_WEBHOOK_SECRET_LEN: usize = 1;
pub const MAX_WEBHOOK_SECRET_LEN: usize = 256;

/// Bot API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather (secret, never logged)
    pub bot_token: Option<String>,
    pub api_base_url: String,
    /// Path the webhook route is mounted on
    pub webhook_path: String,
    /// Expected value of the X-Telegram-Bot-Api-Secret-Token header (secret)
    pub webhook_secret: Option<String>,
    /// Per-request HTTP timeout
    pub request_timeout_secs: u64,
    /// Web app opened from the keyboard shown to regular users
    pub web_app_url: Option<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            webhook_path: String::from(DEFAULT_WEBHOOK_PATH),
            webhook_secret: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            web_app_url: None,
        }
    }
}

impl TelegramConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.bot_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => return Err(ConfigError::telegram("telegram.bot_token is required")),
        }

        if !self.webhook_path.starts_with('/') {
            return Err(ConfigError::telegram(format!(
                "telegram.webhook_path must start with '/', got {}",
                self.webhook_path
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::telegram(format!(
                "telegram.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if let Some(ref secret) = self.webhook_secret
            && !(MIN_WEBHOOK_SECRET_LEN..=MAX_WEBHOOK_SECRET_LEN).contains(&secret.len())
        {
            return Err(ConfigError::telegram(format!(
                "telegram.webhook_secret must be {MIN_WEBHOOK_SECRET_LEN}-{MAX_WEBHOOK_SECRET_LEN} characters, got {}",
                secret.len()
            )));
        }

        if let Some(ref secret) = self.webhook_secret
            && !secret
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::telegram(
                "telegram.webhook_secret may only contain A-Z, a-z, 0-9, '_' and '-'",
            ));
        }

        Ok(())
    }
}
