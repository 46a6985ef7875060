pub mod contracts;
pub mod error;
pub mod models;

pub use contracts::notifier::{NoticeId, Notifier};
pub use contracts::recipient_directory::RecipientDirectory;
pub use contracts::transport::Transport;
pub use error::{CoreError, Result};
pub use models::completion_reason::CompletionReason;
pub use models::content_kind::ContentKind;
pub use models::delivery_result::DeliveryResult;
pub use models::dispatch_report::DispatchReport;
pub use models::dispatch_stats::{DispatchStats, ProgressSnapshot};
pub use models::operator_id::OperatorId;
pub use models::outcome::{MAX_FAILURE_REASON_CHARS, Outcome, UNSUPPORTED_PAYLOAD_REASON};
pub use models::payload::Payload;
pub use models::recipient::Recipient;
pub use models::recipient_id::RecipientId;
pub use models::recipient_profile::RecipientProfile;
pub use models::recipient_set::RecipientSet;
