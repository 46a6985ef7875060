use crate::{CompletionReason, OperatorId, ProgressSnapshot};

use std::time::Duration;

use serde::Serialize;

/// Final account of one dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub operator_id: OperatorId,
    pub stats: ProgressSnapshot,
    pub reason: CompletionReason,
    /// Delivery attempts made, including locally resolved ones.
    pub attempts: u64,
    pub elapsed: Duration,
}

impl DispatchReport {
    pub fn is_cancelled(&self) -> bool {
        self.reason == CompletionReason::Cancelled
    }
}
