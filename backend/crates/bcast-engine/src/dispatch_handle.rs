use crate::{EngineError, Result as EngineErrorResult};

use bcast_core::{DispatchReport, OperatorId};

use tokio::task::JoinHandle;
use uuid::Uuid;

/// Handle to a dispatch running in the background.
///
/// Dropping it detaches the dispatch; it keeps running to completion.
pub struct DispatchHandle {
    pub dispatch_id: Uuid,
    pub operator: OperatorId,
    pub(crate) join: JoinHandle<DispatchReport>,
}

impl DispatchHandle {
    /// Wait for the dispatch to finish and return its report.
    pub async fn wait(self) -> EngineErrorResult<DispatchReport> {
        let dispatch_id = self.dispatch_id;
        self.join
            .await
            .map_err(|e| EngineError::internal(format!("dispatch {dispatch_id} aborted: {e}")))
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
