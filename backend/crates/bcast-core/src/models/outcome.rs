use crate::{ContentKind, DeliveryResult};

/// Upper bound on a failure reason kept for logs and stats.
pub const MAX_FAILURE_REASON_CHARS: usize = 200;

/// Reason recorded for every recipient of a payload the transport cannot carry.
pub const UNSUPPORTED_PAYLOAD_REASON: &str = "this kind of message cannot be broadcast yet";

/// Result of one delivery attempt, recorded once per recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Blocked,
    Failed { reason: String },
}

impl Outcome {
    /// Classify a transport result. Every result maps to exactly one outcome.
    pub fn classify(result: DeliveryResult) -> Self {
        match result {
            DeliveryResult::Accepted => Self::Success,
            DeliveryResult::RecipientBlocked => Self::Blocked,
            DeliveryResult::Error(message) => Self::failed(&message),
        }
    }

    /// Outcome for a payload that was resolved locally without calling the transport.
    pub fn unsupported(kind: ContentKind) -> Self {
        Self::failed(&format!("{UNSUPPORTED_PAYLOAD_REASON} ({kind})"))
    }

    pub fn failed(reason: &str) -> Self {
        Self::Failed {
            reason: truncate_reason(reason),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Blocked => "blocked",
            Self::Failed { .. } => "failed",
        }
    }
}

impl From<DeliveryResult> for Outcome {
    fn from(result: DeliveryResult) -> Self {
        Self::classify(result)
    }
}

fn truncate_reason(reason: &str) -> String {
    let trimmed = reason.trim();
    match trimmed.char_indices().nth(MAX_FAILURE_REASON_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
