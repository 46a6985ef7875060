//! Operator-facing texts for the status notices a dispatch posts.

use bcast_core::{DispatchReport, ProgressSnapshot};

pub fn started(total: u64) -> String {
    format!("Sending the broadcast to {total} recipients...")
}

pub fn progress(snapshot: &ProgressSnapshot) -> String {
    format!(
        "Sending the broadcast...\nProgress: {}/{}\nDelivered: {} | Blocked: {} | Failed: {}",
        snapshot.processed, snapshot.total, snapshot.success, snapshot.blocked, snapshot.failed
    )
}

pub fn summary(report: &DispatchReport) -> String {
    format!(
        "Broadcast finished:\nTotal recipients: {}\nDelivered: {}\nBlocked: {}\nOther errors: {}",
        report.stats.total, report.stats.success, report.stats.blocked, report.stats.failed
    )
}

pub fn cancelled(report: &DispatchReport) -> String {
    format!(
        "Broadcast cancelled after {}/{} recipients.\nDelivered: {} | Blocked: {} | Failed: {}",
        report.stats.processed,
        report.stats.total,
        report.stats.success,
        report.stats.blocked,
        report.stats.failed
    )
}

pub fn directory_unavailable() -> String {
    String::from("Could not load the recipient list, so nothing was sent. Please try again.")
}
