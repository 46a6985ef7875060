use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// HTTP status the Bot API uses when the bot may no longer message a chat.
pub const FORBIDDEN_ERROR_CODE: i64 = 403;

/// Errors that can occur during Bot API calls
#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Bot API error {code}: {description} {location}")]
    Api {
        code: i64,
        description: String,
        retry_after: Option<u64>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bot token is not configured {location}")]
    MissingToken { location: ErrorLocation },
}

impl TelegramError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        TelegramError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        TelegramError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(code: i64, description: String, retry_after: Option<u64>) -> Self {
        TelegramError::Api {
            code,
            description,
            retry_after,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The recipient blocked the bot, left, or was deactivated.
    /// Decided by the structured error code only.
    pub fn is_recipient_blocked(&self) -> bool {
        matches!(self, Self::Api { code, .. } if *code == FORBIDDEN_ERROR_CODE)
    }

    /// Short diagnostic without source locations, suitable for stats and notices.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Http { message, .. } | Self::Json { message, .. } => message.clone(),
            Self::Api {
                code, description, ..
            } => format!("{code}: {description}"),
            Self::MissingToken { .. } => String::from("bot token is not configured"),
        }
    }
}

impl From<reqwest::Error> for TelegramError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TelegramError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TelegramError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        TelegramError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, TelegramError>;
