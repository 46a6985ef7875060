pub mod cancel_affordance;
pub mod cancel_outcome;
pub mod delivery_pacer;
pub mod dispatch_config;
pub mod dispatch_handle;
pub mod dispatcher;
pub mod error;
pub mod messages;
pub mod metrics;
pub mod session_manager;
pub mod session_state;

pub use cancel_affordance::{CANCEL_BROADCAST_ACTION, CancelAffordance};
pub use cancel_outcome::CancelOutcome;
pub use delivery_pacer::DeliveryPacer;
pub use dispatch_config::DispatchConfig;
pub use dispatch_handle::DispatchHandle;
pub use dispatcher::Dispatcher;
pub use error::{EngineError, Result};
pub use metrics::DispatchMetrics;
pub use session_manager::SessionManager;
pub use session_state::SessionState;


use bcast_core::{OperatorId, Payload};

use tracing::info_span;
use uuid::Uuid;

/// Create a tracing span for one dispatch.
/// All log entries emitted while the dispatch runs carry these fields.
pub fn create_dispatch_span(
    dispatch_id: Uuid,
    operator: OperatorId,
    payload: &Payload,
    total: usize,
) -> tracing::Span {
    info_span!(
        "dispatch",
        dispatch_id = %dispatch_id,
        operator = %operator,
        kind = %payload.kind(),
        total = total,
    )
}
