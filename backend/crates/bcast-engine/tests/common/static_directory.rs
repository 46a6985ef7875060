use bcast_core::{
    CoreError, RecipientDirectory, RecipientId, RecipientProfile, RecipientSet,
    Result as CoreResult,
};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-memory directory that counts snapshot requests
#[derive(Default)]
pub struct StaticDirectory {
    ids: Mutex<Vec<RecipientId>>,
    unavailable: AtomicBool,
    snapshots: AtomicUsize,
}

impl StaticDirectory {
    pub fn with_recipients(count: i64) -> Self {
        let directory = Self::default();
        directory
            .ids
            .lock()
            .unwrap()
            .extend((1..=count).map(RecipientId));
        directory
    }

    pub fn unavailable() -> Self {
        let directory = Self::default();
        directory.unavailable.store(true, Ordering::SeqCst);
        directory
    }

    pub fn add(&self, id: i64) {
        self.ids.lock().unwrap().push(RecipientId(id));
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipientDirectory for StaticDirectory {
    async fn list_active_recipients(&self) -> CoreResult<RecipientSet> {
        self.snapshots.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CoreError::directory_unavailable("database is locked"));
        }
        Ok(self.ids.lock().unwrap().iter().copied().collect())
    }

    async fn upsert_recipient(&self, profile: &RecipientProfile) -> CoreResult<()> {
        let mut ids = self.ids.lock().unwrap();
        if !ids.contains(&profile.id) {
            ids.push(profile.id);
        }
        Ok(())
    }
}
