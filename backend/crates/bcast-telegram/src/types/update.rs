use crate::{CallbackQuery, Message};

use serde::{Deserialize, Serialize};

/// Incoming webhook payload. Update kinds the bot does not handle are
/// left out and ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}
