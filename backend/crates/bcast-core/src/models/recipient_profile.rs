use crate::RecipientId;

use serde::{Deserialize, Serialize};

/// Profile fields refreshed every time a recipient interacts with the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientProfile {
    pub id: RecipientId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RecipientProfile {
    pub fn new(id: RecipientId) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}
