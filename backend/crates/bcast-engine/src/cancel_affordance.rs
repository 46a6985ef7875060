use bcast_core::OperatorId;

/// Action identifier an inbound adapter maps back to [`crate::SessionManager::cancel`].
pub const CANCEL_BROADCAST_ACTION: &str = "cancel_broadcast";

/// Returned when a broadcast is started; tells the adapter how to offer cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelAffordance {
    pub operator: OperatorId,
    pub action: &'static str,
}

impl CancelAffordance {
    pub fn for_operator(operator: OperatorId) -> Self {
        Self {
            operator,
            action: CANCEL_BROADCAST_ACTION,
        }
    }
}
