use crate::{OperatorId, Result as CoreResult};

use async_trait::async_trait;

/// Handle of a notice previously posted to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(pub i64);

/// Best-effort side channel back to the operator.
///
/// Callers log failures and carry on; nothing here is retried.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a new notice.
    async fn notify(&self, operator: OperatorId, text: &str) -> CoreResult<NoticeId>;

    /// Replace the text of a notice posted earlier.
    async fn edit(&self, operator: OperatorId, notice: NoticeId, text: &str) -> CoreResult<()>;
}
