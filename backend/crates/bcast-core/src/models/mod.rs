pub mod completion_reason;
pub mod content_kind;
pub mod delivery_result;
pub mod dispatch_report;
pub mod dispatch_stats;
pub mod operator_id;
pub mod outcome;
pub mod payload;
pub mod recipient;
pub mod recipient_id;
pub mod recipient_profile;
pub mod recipient_set;
