use crate::broadcast_config::OperatorList;
use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, KeepAliveConfig, LoggingConfig, ServerConfig,
    TelegramConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub telegram: TelegramConfig,
    pub broadcast: BroadcastConfig,
    pub keep_alive: KeepAliveConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BCAST_CONFIG_DIR env var, else use ./.bcast/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BCAST_* (and the host-provided PORT) environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.clear_blank_options();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BCAST_CONFIG_DIR env var > ./.bcast/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.telegram.validate()?;
        self.broadcast.validate()?;
        self.keep_alive.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Full webhook URL to register with the Bot API, if a public URL is known.
    pub fn webhook_url(&self) -> Option<String> {
        self.server
            .public_base_url()
            .map(|base| format!("{}{}", base, self.telegram.webhook_path))
    }

    /// URL the keep-alive task pings, if keep-alive is enabled and a target is known.
    pub fn keep_alive_url(&self) -> Option<String> {
        if !self.keep_alive.enabled {
            return None;
        }

        self.keep_alive.url.clone().or_else(|| {
            self.server
                .public_base_url()
                .map(|base| format!("{base}/health"))
        })
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  public url: {}",
            self.server.public_url.as_deref().unwrap_or("none")
        );
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  telegram: api={}, webhook={}, secret={}, timeout={}s",
            self.telegram.api_base_url,
            self.telegram.webhook_path,
            if self.telegram.webhook_secret.is_some() {
                "set"
            } else {
                "none"
            },
            self.telegram.request_timeout_secs
        );
        info!(
            "  broadcast: {} operator(s), interval={}ms, progress every {}",
            self.broadcast.operators.len(),
            self.broadcast.min_interval_ms,
            self.broadcast.progress_every
        );
        info!(
            "  keep_alive: {} (every {}s)",
            if self.keep_alive.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.keep_alive.interval_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BCAST_SERVER_HOST", &mut self.server.host);
        // Hosting platforms inject PORT; the prefixed variable still wins
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_parse("BCAST_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("BCAST_SERVER_PUBLIC_URL", &mut self.server.public_url);

        // Database
        Self::apply_env_string("BCAST_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("BCAST_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BCAST_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BCAST_LOG_FILE", &mut self.logging.file);

        // Telegram
        Self::apply_env_option_string("BCAST_TELEGRAM_BOT_TOKEN", &mut self.telegram.bot_token);
        Self::apply_env_string(
            "BCAST_TELEGRAM_API_BASE_URL",
            &mut self.telegram.api_base_url,
        );
        Self::apply_env_string(
            "BCAST_TELEGRAM_WEBHOOK_PATH",
            &mut self.telegram.webhook_path,
        );
        Self::apply_env_option_string(
            "BCAST_TELEGRAM_WEBHOOK_SECRET",
            &mut self.telegram.webhook_secret,
        );
        Self::apply_env_parse(
            "BCAST_TELEGRAM_REQUEST_TIMEOUT_SECS",
            &mut self.telegram.request_timeout_secs,
        );
        Self::apply_env_option_string(
            "BCAST_TELEGRAM_WEB_APP_URL",
            &mut self.telegram.web_app_url,
        );

        // Broadcast
        let mut operators = OperatorList(std::mem::take(&mut self.broadcast.operators));
        Self::apply_env_parse("BCAST_BROADCAST_OPERATORS", &mut operators);
        self.broadcast.operators = operators.0;
        Self::apply_env_parse(
            "BCAST_BROADCAST_MIN_INTERVAL_MS",
            &mut self.broadcast.min_interval_ms,
        );
        Self::apply_env_parse(
            "BCAST_BROADCAST_PROGRESS_EVERY",
            &mut self.broadcast.progress_every,
        );

        // Keep-alive
        Self::apply_env_bool("BCAST_KEEP_ALIVE_ENABLED", &mut self.keep_alive.enabled);
        Self::apply_env_parse(
            "BCAST_KEEP_ALIVE_INTERVAL_SECS",
            &mut self.keep_alive.interval_secs,
        );
        Self::apply_env_option_string("BCAST_KEEP_ALIVE_URL", &mut self.keep_alive.url);
    }

    /// A blank optional value means unset, whether it came from the file or the environment.
    fn clear_blank_options(&mut self) {
        for value in [
            &mut self.server.public_url,
            &mut self.logging.file,
            &mut self.telegram.bot_token,
            &mut self.telegram.webhook_secret,
            &mut self.telegram.web_app_url,
            &mut self.keep_alive.url,
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *value = None;
            }
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
