use crate::{AuthError, Result as AuthErrorResult};

use bcast_core::OperatorId;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Fixed set of operators allowed to start broadcasts.
///
/// Built once from configuration and never mutated; clones share the set.
#[derive(Debug, Clone, Default)]
pub struct OperatorAllowList {
    operators: Arc<HashSet<OperatorId>>,
}

impl OperatorAllowList {
    pub fn new<I>(operators: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OperatorId>,
    {
        Self {
            operators: Arc::new(operators.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_authorized(&self, operator: OperatorId) -> bool {
        self.operators.contains(&operator)
    }

    #[track_caller]
    pub fn authorize(&self, operator: OperatorId) -> AuthErrorResult<()> {
        if self.is_authorized(operator) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                operator,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
