mod common;

use common::{
    FakeTransport, NoticeEvent, OPERATOR, RecordingNotifier, build_dispatcher, fast_config,
    recipients, text_payload,
};

use bcast_core::{
    CompletionReason, ContentKind, DeliveryResult, Payload, RecipientId, RecipientSet,
};
use bcast_engine::DispatchConfig;

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn given_empty_recipient_set_when_run_then_completes_with_zero_stats() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier.clone(), fast_config());

    // When
    let report = dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &RecipientSet::empty(),
            &CancellationToken::new(),
        )
        .await;

    // Then
    assert_that!(report.reason, eq(CompletionReason::Completed));
    assert_that!(report.stats.processed, eq(0));
    assert_that!(report.stats.total, eq(0));
    assert_that!(report.attempts, eq(0));
    assert_that!(transport.call_count(), eq(0));
    let posted = notifier.posted();
    assert_that!(posted, len(eq(2)));
    assert_that!(posted[1], starts_with("Broadcast finished"));
}

#[tokio::test]
async fn given_25_recipients_and_progress_every_10_when_run_then_two_progress_updates_and_summary() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier.clone(), fast_config());

    // When
    let report = dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(25),
            &CancellationToken::new(),
        )
        .await;

    // Then
    assert_that!(report.stats.processed, eq(25));
    assert_that!(report.stats.success, eq(25));

    let edited = notifier.edited();
    assert_that!(edited, len(eq(2)));
    assert_that!(edited[0], contains_substring("Progress: 10/25"));
    assert_that!(edited[1], contains_substring("Progress: 20/25"));

    let summaries: Vec<String> = notifier
        .posted()
        .into_iter()
        .filter(|text| text.starts_with("Broadcast finished"))
        .collect();
    assert_that!(summaries, len(eq(1)));
}

#[tokio::test]
async fn given_progress_updates_when_run_then_they_edit_the_start_notice() {
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport, notifier.clone(), fast_config());

    dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(10),
            &CancellationToken::new(),
        )
        .await;

    let events = notifier.events();
    let NoticeEvent::Posted { notice: start, .. } = &events[0] else {
        panic!("first event should be the start notice, got {events:?}");
    };
    assert!(matches!(
        &events[1],
        NoticeEvent::Edited { notice, .. } if notice == start
    ));
}

#[tokio::test]
async fn given_cancel_before_start_when_run_then_nothing_attempted() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier.clone(), fast_config());
    let cancel = CancellationToken::new();
    cancel.cancel();

    // When
    let report = dispatcher
        .run(OPERATOR, &text_payload(), &recipients(5), &cancel)
        .await;

    // Then
    assert_that!(report.reason, eq(CompletionReason::Cancelled));
    assert_that!(report.stats.processed, eq(0));
    assert_that!(report.stats.total, eq(5));
    assert_that!(transport.call_count(), eq(0));

    let posted = notifier.posted();
    assert!(posted.iter().any(|text| text.contains("cancelled after 0/5")));
    assert!(!posted.iter().any(|text| text.starts_with("Broadcast finished")));
}

#[tokio::test]
async fn given_cancel_mid_run_when_run_then_stops_after_current_attempt() {
    // Given
    let cancel = CancellationToken::new();
    let transport = Arc::new(FakeTransport::new().cancelling_after(4, cancel.clone()));
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier, fast_config());

    // When
    let report = dispatcher
        .run(OPERATOR, &text_payload(), &recipients(20), &cancel)
        .await;

    // Then
    assert_that!(report.reason, eq(CompletionReason::Cancelled));
    assert_that!(report.stats.processed, eq(4));
    assert_that!(report.attempts, eq(4));
    assert_that!(transport.call_count(), eq(4));
}

#[tokio::test]
async fn given_mixed_transport_results_when_run_then_each_outcome_counted_once() {
    // Given
    let transport = Arc::new(
        FakeTransport::new()
            .with_result(2, DeliveryResult::RecipientBlocked)
            .with_result(4, DeliveryResult::RecipientBlocked)
            .with_result(5, DeliveryResult::Error("Bad Request: chat not found".into())),
    );
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport, notifier, fast_config());

    // When
    let report = dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(6),
            &CancellationToken::new(),
        )
        .await;

    // Then
    let stats = report.stats;
    assert_that!(stats.success, eq(3));
    assert_that!(stats.blocked, eq(2));
    assert_that!(stats.failed, eq(1));
    assert_that!(
        stats.success + stats.blocked + stats.failed,
        eq(stats.processed)
    );
}

#[tokio::test]
async fn given_unsupported_payload_when_run_then_all_failed_without_transport_calls() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier, fast_config());
    let payload = Payload::Unsupported {
        kind: ContentKind::Sticker,
    };

    // When
    let report = dispatcher
        .run(OPERATOR, &payload, &recipients(3), &CancellationToken::new())
        .await;

    // Then
    assert_that!(report.stats.failed, eq(3));
    assert_that!(report.attempts, eq(3));
    assert_that!(report.reason, eq(CompletionReason::Completed));
    assert_that!(transport.call_count(), eq(0));
}

#[tokio::test]
async fn given_snapshot_when_run_then_every_recipient_attempted_once_in_order() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(transport.clone(), notifier, fast_config());
    let snapshot: RecipientSet = [30, 10, 20, 10].into_iter().map(RecipientId).collect();

    // When
    dispatcher
        .run(OPERATOR, &text_payload(), &snapshot, &CancellationToken::new())
        .await;

    // Then
    assert_that!(
        transport.calls(),
        elements_are![
            eq(&RecipientId(10)),
            eq(&RecipientId(20)),
            eq(&RecipientId(30))
        ]
    );
}

#[tokio::test]
async fn given_failing_edits_when_run_then_dispatch_still_completes() {
    // Given
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    notifier.fail_edit(true);
    let dispatcher = build_dispatcher(transport, notifier.clone(), fast_config());

    // When
    let report = dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(30),
            &CancellationToken::new(),
        )
        .await;

    // Then
    assert_that!(report.reason, eq(CompletionReason::Completed));
    assert_that!(report.stats.success, eq(30));
    assert_that!(notifier.edited(), is_empty());
}

#[tokio::test]
async fn given_notifier_down_when_run_then_dispatch_unaffected() {
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    notifier.fail_notify(true);
    let dispatcher = build_dispatcher(transport.clone(), notifier.clone(), fast_config());

    let report = dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(12),
            &CancellationToken::new(),
        )
        .await;

    assert_that!(report.stats.processed, eq(12));
    assert_that!(transport.call_count(), eq(12));
    assert_that!(notifier.events(), is_empty());
}

#[tokio::test]
async fn given_no_start_notice_when_progress_due_then_fresh_notice_posted() {
    // Given: the start notice fails, later notices succeed
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    notifier.fail_notify(true);
    let dispatcher = Arc::new(build_dispatcher(
        transport,
        notifier.clone(),
        DispatchConfig {
            min_interval: Duration::from_millis(10),
            progress_every: 10,
        },
    ));

    // When
    let run = {
        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move {
            dispatcher
                .run(
                    OPERATOR,
                    &text_payload(),
                    &recipients(10),
                    &CancellationToken::new(),
                )
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    notifier.fail_notify(false);
    run.await.unwrap();

    // Then
    let posted = notifier.posted();
    assert!(posted[0].contains("Progress: 10/10"), "got {posted:?}");
    assert_that!(notifier.edited(), is_empty());
}

#[tokio::test]
async fn given_min_interval_when_run_then_every_gap_is_at_least_interval() {
    // Given
    let interval = Duration::from_millis(20);
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(
        transport.clone(),
        notifier,
        DispatchConfig {
            min_interval: interval,
            progress_every: 10,
        },
    );

    // When
    dispatcher
        .run(
            OPERATOR,
            &text_payload(),
            &recipients(6),
            &CancellationToken::new(),
        )
        .await;

    // Then
    let times = transport.attempt_times();
    assert_that!(times, len(eq(6)));
    let gaps: Vec<Duration> = times.windows(2).map(|pair| pair[1] - pair[0]).collect();
    assert!(
        gaps.iter().all(|gap| *gap >= interval),
        "gaps shorter than {interval:?}: {gaps:?}"
    );
}

#[tokio::test]
async fn given_long_interval_when_cancelled_during_wait_then_returns_promptly() {
    // Given
    let cancel = CancellationToken::new();
    let transport = Arc::new(FakeTransport::new().cancelling_after(1, cancel.clone()));
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher = build_dispatcher(
        transport.clone(),
        notifier,
        DispatchConfig {
            min_interval: Duration::from_secs(30),
            progress_every: 10,
        },
    );

    // When
    let report = tokio::time::timeout(
        Duration::from_secs(5),
        dispatcher.run(OPERATOR, &text_payload(), &recipients(3), &cancel),
    )
    .await
    .expect("cancellation should interrupt the pacing wait");

    // Then
    assert_that!(report.reason, eq(CompletionReason::Cancelled));
    assert_that!(report.stats.processed, eq(1));
    assert_that!(transport.call_count(), eq(1));
}
