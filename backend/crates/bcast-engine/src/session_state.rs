use std::fmt;

/// Where an operator is in the broadcast flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Idle,
    /// Start was pressed; the next message from the operator is the payload.
    AwaitingPayload,
    Dispatching,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingPayload => "awaiting_payload",
            Self::Dispatching => "dispatching",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
