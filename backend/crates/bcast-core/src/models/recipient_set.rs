use crate::RecipientId;

use std::collections::BTreeSet;

/// Immutable snapshot of the recipients a dispatch will attempt.
///
/// Ids are unique and iterate in ascending order, so a given snapshot is
/// always walked the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSet {
    ids: Vec<RecipientId>,
}

impl RecipientSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RecipientId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipientId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecipientId> for RecipientSet {
    fn from_iter<I: IntoIterator<Item = RecipientId>>(iter: I) -> Self {
        let unique: BTreeSet<RecipientId> = iter.into_iter().collect();
        Self {
            ids: unique.into_iter().collect(),
        }
    }
}
