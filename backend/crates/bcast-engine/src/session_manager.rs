use crate::{
    CancelAffordance, CancelOutcome, DispatchHandle, DispatchMetrics, Dispatcher, EngineError,
    Result as EngineErrorResult, SessionState, create_dispatch_span, messages,
};

use bcast_auth::OperatorAllowList;
use bcast_core::{Notifier, OperatorId, Payload, RecipientDirectory};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{info, warn};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

/// Per-operator phase. Operators absent from the map are idle.
enum SessionPhase {
    AwaitingPayload,
    Dispatching(ActiveDispatch),
}

struct ActiveDispatch {
    dispatch_id: Uuid,
    cancel: CancellationToken,
}

impl SessionPhase {
    fn state(&self) -> SessionState {
        match self {
            Self::AwaitingPayload => SessionState::AwaitingPayload,
            Self::Dispatching(_) => SessionState::Dispatching,
        }
    }
}

type SessionMap = Arc<Mutex<HashMap<OperatorId, SessionPhase>>>;

fn lock(sessions: &SessionMap) -> MutexGuard<'_, HashMap<OperatorId, SessionPhase>> {
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcast session state machine, one session per operator.
///
/// The lock is only held for transitions, never across an await.
#[derive(Clone)]
pub struct SessionManager {
    sessions: SessionMap,
    allow_list: OperatorAllowList,
    directory: Arc<dyn RecipientDirectory>,
    dispatcher: Arc<Dispatcher>,
    notifier: Arc<dyn Notifier>,
    metrics: DispatchMetrics,
}

impl SessionManager {
    pub fn new(
        allow_list: OperatorAllowList,
        directory: Arc<dyn RecipientDirectory>,
        dispatcher: Arc<Dispatcher>,
        notifier: Arc<dyn Notifier>,
        metrics: DispatchMetrics,
    ) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            allow_list,
            directory,
            dispatcher,
            notifier,
            metrics,
        }
    }

    pub fn is_operator(&self, operator: OperatorId) -> bool {
        self.allow_list.is_authorized(operator)
    }

    pub fn state(&self, operator: OperatorId) -> SessionState {
        lock(&self.sessions)
            .get(&operator)
            .map_or(SessionState::Idle, SessionPhase::state)
    }

    /// Number of dispatches currently running across all operators.
    pub fn active_dispatches(&self) -> usize {
        lock(&self.sessions)
            .values()
            .filter(|phase| matches!(phase, SessionPhase::Dispatching(_)))
            .count()
    }

    /// Idle -> AwaitingPayload.
    pub fn start_broadcast(&self, operator: OperatorId) -> EngineErrorResult<CancelAffordance> {
        self.authorize(operator)?;

        let mut sessions = lock(&self.sessions);
        if let Some(phase) = sessions.get(&operator) {
            let state = phase.state();
            drop(sessions);
            return Err(self.reject(EngineError::already_active(operator, state)));
        }

        sessions.insert(operator, SessionPhase::AwaitingPayload);
        drop(sessions);

        info!("Operator {operator} is composing a broadcast");
        self.metrics.session_transition(SessionState::AwaitingPayload.as_str());

        Ok(CancelAffordance::for_operator(operator))
    }

    /// Abandon a composing session, or signal a running dispatch to stop.
    /// Never waits for the dispatch to wind down.
    pub fn cancel(&self, operator: OperatorId) -> EngineErrorResult<CancelOutcome> {
        self.authorize(operator)?;

        let mut sessions = lock(&self.sessions);
        let outcome = match sessions.get(&operator) {
            None => None,
            Some(SessionPhase::AwaitingPayload) => {
                sessions.remove(&operator);
                Some(CancelOutcome::Abandoned)
            }
            Some(SessionPhase::Dispatching(active)) => {
                active.cancel.cancel();
                Some(CancelOutcome::Signalled)
            }
        };
        drop(sessions);

        match outcome {
            Some(outcome) => {
                info!("Operator {operator} cancelled the broadcast ({outcome:?})");
                self.metrics.session_transition("cancelled");
                Ok(outcome)
            }
            None => Err(self.reject(EngineError::nothing_to_cancel(operator))),
        }
    }

    /// AwaitingPayload -> Dispatching. Takes one directory snapshot and runs
    /// the dispatcher in the background; the session returns to idle when it ends.
    pub async fn submit_payload(
        &self,
        operator: OperatorId,
        payload: Payload,
    ) -> EngineErrorResult<DispatchHandle> {
        self.authorize(operator)?;

        let dispatch_id = Uuid::new_v4();
        let cancel = CancellationToken::new();

        {
            let mut sessions = lock(&self.sessions);
            match sessions.get(&operator) {
                Some(SessionPhase::AwaitingPayload) => {
                    sessions.insert(
                        operator,
                        SessionPhase::Dispatching(ActiveDispatch {
                            dispatch_id,
                            cancel: cancel.clone(),
                        }),
                    );
                }
                other => {
                    let state = other.map_or(SessionState::Idle, SessionPhase::state);
                    drop(sessions);
                    return Err(self.reject(EngineError::not_awaiting_payload(operator, state)));
                }
            }
        }

        // Released on every exit path below, including a panicking dispatch
        let release = SessionRelease {
            sessions: Arc::clone(&self.sessions),
            operator,
            dispatch_id,
        };

        let recipients = match self.directory.list_active_recipients().await {
            Ok(recipients) => recipients,
            Err(e) => {
                drop(release);
                warn!("Recipient snapshot failed for operator {operator}: {e}");
                if let Err(notify_err) = self
                    .notifier
                    .notify(operator, &messages::directory_unavailable())
                    .await
                {
                    warn!("Failed to notify operator {operator}: {notify_err}");
                    self.metrics.notification_failed("notify");
                }
                return Err(self.reject(EngineError::directory_unavailable(e.to_string())));
            }
        };

        self.metrics.session_transition(SessionState::Dispatching.as_str());

        let span = create_dispatch_span(dispatch_id, operator, &payload, recipients.len());
        let dispatcher = Arc::clone(&self.dispatcher);
        let join = tokio::spawn(
            async move {
                let _release = release;
                dispatcher
                    .run(operator, &payload, &recipients, &cancel)
                    .await
            }
            .instrument(span),
        );

        Ok(DispatchHandle {
            dispatch_id,
            operator,
            join,
        })
    }

    /// Signal every running dispatch to stop (used on shutdown).
    pub fn cancel_all(&self) -> usize {
        let sessions = lock(&self.sessions);
        let mut signalled = 0;
        for phase in sessions.values() {
            if let SessionPhase::Dispatching(active) = phase {
                active.cancel.cancel();
                signalled += 1;
            }
        }
        signalled
    }

    fn authorize(&self, operator: OperatorId) -> EngineErrorResult<()> {
        self.allow_list
            .authorize(operator)
            .map_err(|_| self.reject(EngineError::unauthorized(operator)))
    }

    fn reject(&self, err: EngineError) -> EngineError {
        self.metrics.session_rejected(err.error_code());
        err
    }
}

/// Returns the operator's session to idle when dropped, unless a newer
/// dispatch has taken its place.
struct SessionRelease {
    sessions: SessionMap,
    operator: OperatorId,
    dispatch_id: Uuid,
}

impl Drop for SessionRelease {
    fn drop(&mut self) {
        let mut sessions = lock(&self.sessions);
        let owned = matches!(
            sessions.get(&self.operator),
            Some(SessionPhase::Dispatching(active)) if active.dispatch_id == self.dispatch_id
        );
        if owned {
            sessions.remove(&self.operator);
        }
    }
}
