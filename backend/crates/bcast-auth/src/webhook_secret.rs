use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use subtle::ConstantTimeEq;

/// Header the Bot API echoes back on every webhook delivery.
pub const WEBHOOK_SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Verifies the webhook secret header. Without a configured secret every
/// request passes.
#[derive(Clone, Default)]
pub struct WebhookSecret {
    expected: Option<Vec<u8>>,
}

impl WebhookSecret {
    pub fn new(expected: Option<&str>) -> Self {
        Self {
            expected: expected
                .filter(|secret| !secret.is_empty())
                .map(|secret| secret.as_bytes().to_vec()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    #[track_caller]
    pub fn verify(&self, provided: Option<&str>) -> AuthErrorResult<()> {
        let Some(expected) = self.expected.as_deref() else {
            return Ok(());
        };

        let provided = provided.ok_or_else(|| AuthError::MissingWebhookSecret {
            location: ErrorLocation::from(Location::caller()),
        })?;

        if bool::from(provided.as_bytes().ct_eq(expected)) {
            Ok(())
        } else {
            Err(AuthError::InvalidWebhookSecret {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSecret")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
