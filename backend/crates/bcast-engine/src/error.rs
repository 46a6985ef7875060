use crate::SessionState;

use bcast_core::OperatorId;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Operator {operator} is not allowed to broadcast {location}")]
    Unauthorized {
        operator: OperatorId,
        location: ErrorLocation,
    },

    #[error("Operator {operator} already has a broadcast in state {state} {location}")]
    AlreadyActive {
        operator: OperatorId,
        state: SessionState,
        location: ErrorLocation,
    },

    #[error("Operator {operator} is not waiting for a payload (state {state}) {location}")]
    NotAwaitingPayload {
        operator: OperatorId,
        state: SessionState,
        location: ErrorLocation,
    },

    #[error("Operator {operator} has no broadcast to cancel {location}")]
    NothingToCancel {
        operator: OperatorId,
        location: ErrorLocation,
    },

    #[error("Recipient directory unavailable: {message} {location}")]
    DirectoryUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl EngineError {
    /// Stable code for replies and metrics labels.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::AlreadyActive { .. } => "ALREADY_ACTIVE",
            Self::NotAwaitingPayload { .. } => "NOT_AWAITING_PAYLOAD",
            Self::NothingToCancel { .. } => "NOTHING_TO_CANCEL",
            Self::DirectoryUnavailable { .. } => "DIRECTORY_UNAVAILABLE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    #[track_caller]
    pub(crate) fn unauthorized(operator: OperatorId) -> Self {
        Self::Unauthorized {
            operator,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn already_active(operator: OperatorId, state: SessionState) -> Self {
        Self::AlreadyActive {
            operator,
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn not_awaiting_payload(operator: OperatorId, state: SessionState) -> Self {
        Self::NotAwaitingPayload {
            operator,
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn nothing_to_cancel(operator: OperatorId) -> Self {
        Self::NothingToCancel {
            operator,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn directory_unavailable<S: Into<String>>(message: S) -> Self {
        Self::DirectoryUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
