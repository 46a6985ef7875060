use crate::{RecipientProfile, RecipientSet, Result as CoreResult};

use async_trait::async_trait;

#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    /// Snapshot of every recipient that has not been marked blocked.
    async fn list_active_recipients(&self) -> CoreResult<RecipientSet>;

    /// Record that a recipient was seen, refreshing its profile. Idempotent.
    async fn upsert_recipient(&self, profile: &RecipientProfile) -> CoreResult<()>;
}
