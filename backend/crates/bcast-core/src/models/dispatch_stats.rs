use crate::Outcome;

use serde::Serialize;

/// Read-only copy of dispatch counters handed to progress notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressSnapshot {
    pub processed: u64,
    pub total: u64,
    pub success: u64,
    pub blocked: u64,
    pub failed: u64,
}

/// Counters owned by a running dispatch.
///
/// The only mutation is [`DispatchStats::record`], which keeps
/// `processed == success + blocked + failed` and never lets `processed`
/// pass `total`.
#[derive(Debug, Clone)]
pub struct DispatchStats {
    total: u64,
    processed: u64,
    success: u64,
    blocked: u64,
    failed: u64,
}

impl DispatchStats {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            processed: 0,
            success: 0,
            blocked: 0,
            failed: 0,
        }
    }

    /// Record one outcome. Returns false (and changes nothing) once every
    /// recipient has already been counted.
    pub fn record(&mut self, outcome: &Outcome) -> bool {
        if self.processed >= self.total {
            return false;
        }

        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Blocked => self.blocked += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
        self.processed += 1;
        true
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn success(&self) -> u64 {
        self.success
    }

    pub fn blocked(&self) -> u64 {
        self.blocked
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn is_finished(&self) -> bool {
        self.processed == self.total
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            processed: self.processed,
            total: self.total,
            success: self.success,
            blocked: self.blocked,
            failed: self.failed,
        }
    }
}
