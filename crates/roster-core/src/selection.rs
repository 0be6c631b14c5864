//! Ids checked for bulk operations.

use std::collections::BTreeSet;

use roster_model::RecordId;

/// Set of selected record ids.
///
/// Selection is advisory: it feeds bulk deletion and nothing else. The
/// [`Dashboard`](crate::Dashboard) only admits ids present in the store and
/// drops ids as their records are deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    /// Flip one id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn insert(&mut self, id: RecordId) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: RecordId) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_set(&self) -> &BTreeSet<RecordId> {
        &self.ids
    }
}
