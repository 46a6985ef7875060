use bcast_core::OperatorId;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Operator {operator} is not allowed to broadcast {location}")]
    Unauthorized {
        operator: OperatorId,
        location: ErrorLocation,
    },

    #[error("Missing webhook secret header {location}")]
    MissingWebhookSecret { location: ErrorLocation },

    #[error("Webhook secret does not match {location}")]
    InvalidWebhookSecret { location: ErrorLocation },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::MissingWebhookSecret { .. } => "MISSING_WEBHOOK_SECRET",
            Self::InvalidWebhookSecret { .. } => "INVALID_WEBHOOK_SECRET",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
