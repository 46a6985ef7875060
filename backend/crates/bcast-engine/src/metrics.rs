use bcast_core::{CompletionReason, Outcome};

use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for broadcast sessions and dispatches
#[derive(Clone)]
pub struct DispatchMetrics {
    prefix: &'static str,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "bcast_engine",
        }
    }

    pub fn dispatch_started(&self, total: u64) {
        counter!(format!("{}.dispatch.started", self.prefix)).increment(1);
        gauge!(format!("{}.dispatch.active", self.prefix)).increment(1.0);
        histogram!(format!("{}.dispatch.recipients", self.prefix)).record(total as f64);
    }

    pub fn dispatch_finished(&self, reason: CompletionReason, elapsed: Duration) {
        counter!(format!("{}.dispatch.{}", self.prefix, reason.as_str())).increment(1);
        gauge!(format!("{}.dispatch.active", self.prefix)).decrement(1.0);
        histogram!(format!("{}.dispatch.duration_ms", self.prefix))
            .record(elapsed.as_millis() as f64);
    }

    pub fn outcome_recorded(&self, outcome: &Outcome) {
        counter!(format!("{}.deliveries.total", self.prefix)).increment(1);
        counter!(format!("{}.deliveries.{}", self.prefix, outcome.as_str())).increment(1);
    }

    pub fn delivery_latency(&self, duration: Duration) {
        histogram!(format!("{}.deliveries.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }

    /// Record a notice to the operator that could not be posted or edited
    pub fn notification_failed(&self, action: &str) {
        counter!(format!("{}.notifications.failed", self.prefix)).increment(1);
        counter!(format!("{}.notifications.failed.{}", self.prefix, action)).increment(1);
    }

    /// Record a session transition that was rejected
    pub fn session_rejected(&self, error_code: &str) {
        counter!(format!("{}.sessions.rejected", self.prefix)).increment(1);
        counter!(format!("{}.sessions.rejected.{}", self.prefix, error_code)).increment(1);
    }

    pub fn session_transition(&self, to: &str) {
        counter!(format!("{}.sessions.{}", self.prefix, to)).increment(1);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
