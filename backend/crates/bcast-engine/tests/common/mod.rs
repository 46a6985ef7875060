#![allow(dead_code)]

mod fake_transport;
mod recording_notifier;
mod static_directory;

pub use fake_transport::FakeTransport;
pub use recording_notifier::{NoticeEvent, RecordingNotifier};
pub use static_directory::StaticDirectory;

use bcast_auth::OperatorAllowList;
use bcast_core::{OperatorId, Payload, RecipientId, RecipientSet};
use bcast_engine::{DispatchConfig, DispatchMetrics, Dispatcher, SessionManager};

use std::sync::Arc;
use std::time::Duration;

pub const OPERATOR: OperatorId = OperatorId(1000);
pub const OTHER_OPERATOR: OperatorId = OperatorId(2000);
pub const STRANGER: OperatorId = OperatorId(4242);

/// No pacing, progress every 10
pub fn fast_config() -> DispatchConfig {
    DispatchConfig {
        min_interval: Duration::ZERO,
        progress_every: 10,
    }
}

pub fn text_payload() -> Payload {
    Payload::Text {
        text: "hello everyone".to_string(),
    }
}

pub fn recipients(count: i64) -> RecipientSet {
    (1..=count).map(RecipientId).collect()
}

pub fn build_dispatcher(
    transport: Arc<FakeTransport>,
    notifier: Arc<RecordingNotifier>,
    config: DispatchConfig,
) -> Dispatcher {
    Dispatcher::new(transport, notifier, config, DispatchMetrics::new())
}

pub struct Harness {
    pub manager: SessionManager,
    pub transport: Arc<FakeTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub directory: Arc<StaticDirectory>,
}

/// Session manager wired to fakes, with OPERATOR and OTHER_OPERATOR allowed
pub fn build_harness(transport: FakeTransport, directory: StaticDirectory) -> Harness {
    let transport = Arc::new(transport);
    let notifier = Arc::new(RecordingNotifier::new());
    let directory = Arc::new(directory);
    let dispatcher = Arc::new(build_dispatcher(
        Arc::clone(&transport),
        Arc::clone(&notifier),
        fast_config(),
    ));

    let manager = SessionManager::new(
        OperatorAllowList::new([OPERATOR, OTHER_OPERATOR]),
        directory.clone(),
        dispatcher,
        notifier.clone(),
        DispatchMetrics::new(),
    );

    Harness {
        manager,
        transport,
        notifier,
        directory,
    }
}
