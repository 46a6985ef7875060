use bcast_core::{RecipientId, RecipientProfile};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl User {
    /// Profile stored in the recipient directory for this user.
    pub fn profile(&self) -> RecipientProfile {
        RecipientProfile {
            id: RecipientId(self.id),
            username: self.username.clone(),
            first_name: Some(self.first_name.clone()),
            last_name: self.last_name.clone(),
        }
    }
}
