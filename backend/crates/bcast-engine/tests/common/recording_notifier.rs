use bcast_core::{CoreError, NoticeId, Notifier, OperatorId, Result as CoreResult};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeEvent {
    Posted {
        operator: OperatorId,
        notice: NoticeId,
        text: String,
    },
    Edited {
        operator: OperatorId,
        notice: NoticeId,
        text: String,
    },
}

impl NoticeEvent {
    pub fn text(&self) -> &str {
        match self {
            Self::Posted { text, .. } | Self::Edited { text, .. } => text,
        }
    }
}

/// Notifier that keeps every successful notice and can be told to fail
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<NoticeEvent>>,
    next_id: AtomicI64,
    fail_notify: AtomicBool,
    fail_edit: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_notify(&self, fail: bool) {
        self.fail_notify.store(fail, Ordering::SeqCst);
    }

    pub fn fail_edit(&self, fail: bool) {
        self.fail_edit.store(fail, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<NoticeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NoticeEvent::Posted { text, .. } => Some(text),
                NoticeEvent::Edited { .. } => None,
            })
            .collect()
    }

    pub fn edited(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NoticeEvent::Edited { text, .. } => Some(text),
                NoticeEvent::Posted { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, operator: OperatorId, text: &str) -> CoreResult<NoticeId> {
        if self.fail_notify.load(Ordering::SeqCst) {
            return Err(CoreError::notification_failed("notify disabled by test"));
        }

        let notice = NoticeId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.events.lock().unwrap().push(NoticeEvent::Posted {
            operator,
            notice,
            text: text.to_string(),
        });
        Ok(notice)
    }

    async fn edit(&self, operator: OperatorId, notice: NoticeId, text: &str) -> CoreResult<()> {
        if self.fail_edit.load(Ordering::SeqCst) {
            return Err(CoreError::notification_failed("edit disabled by test"));
        }

        self.events.lock().unwrap().push(NoticeEvent::Edited {
            operator,
            notice,
            text: text.to_string(),
        });
        Ok(())
    }
}
