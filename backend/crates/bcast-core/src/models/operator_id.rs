use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of someone who may be allowed to start broadcasts.
///
/// Operators are addressed through the same chat namespace as recipients,
/// so an operator id doubles as the chat that receives progress notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(pub i64);

impl OperatorId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for OperatorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
