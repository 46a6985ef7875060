use crate::{DeliveryPacer, DispatchConfig, DispatchMetrics, messages};

use bcast_core::{
    CompletionReason, DispatchReport, DispatchStats, NoticeId, Notifier, OperatorId, Outcome,
    Payload, RecipientId, RecipientSet, Transport,
};

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

/// Fans one payload out to a recipient snapshot.
///
/// Owns its transport and notifier handles; stats live only inside [`Dispatcher::run`].
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    config: DispatchConfig,
    metrics: DispatchMetrics,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
        config: DispatchConfig,
        metrics: DispatchMetrics,
    ) -> Self {
        Self {
            transport,
            notifier,
            config,
            metrics,
        }
    }

    /// Attempt every recipient once, in snapshot order, until done or cancelled.
    ///
    /// Progress is reported by editing a single status notice; the final
    /// summary (or cancellation notice) is posted as a fresh notice.
    pub async fn run(
        &self,
        operator: OperatorId,
        payload: &Payload,
        recipients: &RecipientSet,
        cancel: &CancellationToken,
    ) -> DispatchReport {
        let started = Instant::now();
        let mut stats = DispatchStats::new(recipients.len() as u64);
        let mut attempts: u64 = 0;
        let mut reason = CompletionReason::Completed;
        let pacer = DeliveryPacer::new(self.config.min_interval);

        info!(
            "Dispatch started for operator {}: {} recipients, kind {}",
            operator,
            stats.total(),
            payload.kind()
        );
        self.metrics.dispatch_started(stats.total());

        let mut status_notice = self
            .post_notice(operator, &messages::started(stats.total()))
            .await;

        for recipient in recipients.iter() {
            if cancel.is_cancelled() {
                reason = CompletionReason::Cancelled;
                break;
            }

            if let Some(ref pacer) = pacer {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        reason = CompletionReason::Cancelled;
                        break;
                    }
                    _ = pacer.until_ready() => {}
                }
            }

            let outcome = self.attempt(recipient, payload).await;
            attempts += 1;
            self.metrics.outcome_recorded(&outcome);

            if !stats.record(&outcome) {
                warn!("Outcome for recipient {recipient} arrived after all recipients were counted");
                continue;
            }

            if self.config.progress_every > 0 && stats.processed() % self.config.progress_every == 0
            {
                let text = messages::progress(&stats.snapshot());
                status_notice = self.update_status(operator, status_notice, &text).await;
            }
        }

        let report = DispatchReport {
            operator_id: operator,
            stats: stats.snapshot(),
            reason,
            attempts,
            elapsed: started.elapsed(),
        };

        self.metrics.dispatch_finished(report.reason, report.elapsed);
        info!(
            "Dispatch {} for operator {}: {}/{} processed ({} delivered, {} blocked, {} failed) in {:?}",
            report.reason.as_str(),
            operator,
            report.stats.processed,
            report.stats.total,
            report.stats.success,
            report.stats.blocked,
            report.stats.failed,
            report.elapsed
        );

        let terminal = match report.reason {
            CompletionReason::Completed => messages::summary(&report),
            CompletionReason::Cancelled => messages::cancelled(&report),
        };
        self.post_notice(operator, &terminal).await;

        report
    }

    async fn attempt(&self, recipient: RecipientId, payload: &Payload) -> Outcome {
        if !payload.is_supported() {
            return Outcome::unsupported(payload.kind());
        }

        let sent_at = Instant::now();
        let result = self.transport.deliver(recipient, payload).await;
        self.metrics.delivery_latency(sent_at.elapsed());

        let outcome = Outcome::classify(result);
        match &outcome {
            Outcome::Success => {}
            Outcome::Blocked => debug!("Recipient {recipient} has blocked the bot"),
            Outcome::Failed { reason } => warn!("Delivery to {recipient} failed: {reason}"),
        }
        outcome
    }

    async fn post_notice(&self, operator: OperatorId, text: &str) -> Option<NoticeId> {
        match self.notifier.notify(operator, text).await {
            Ok(notice) => Some(notice),
            Err(e) => {
                warn!("Failed to notify operator {operator}: {e}");
                self.metrics.notification_failed("notify");
                None
            }
        }
    }

    /// Rewrite the status notice in place, or post a new one when there is none.
    async fn update_status(
        &self,
        operator: OperatorId,
        notice: Option<NoticeId>,
        text: &str,
    ) -> Option<NoticeId> {
        let Some(notice) = notice else {
            return self.post_notice(operator, text).await;
        };

        if let Err(e) = self.notifier.edit(operator, notice, text).await {
            warn!("Failed to update progress for operator {operator}: {e}");
            self.metrics.notification_failed("edit");
        }
        Some(notice)
    }
}
