//! Per-row view/edit state.
//!
//! Row state is tracked independently of the record data. Entries exist only
//! for rows that have been touched; a missing entry means [`RowMode::View`].
//! While a row is in edit mode the tracker also holds its draft: a copy of
//! the record that field edits go to until the row is saved or cancelled.

use std::collections::BTreeMap;

use roster_model::{Record, RecordField, RecordId};

/// Display mode of one grid row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    View,
    Edit,
}

/// Tracked state of one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowModeEntry {
    pub mode: RowMode,
    /// Set when the last edit was cancelled: uncommitted field edits are to
    /// be reverted rather than committed.
    pub discard: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EditModeTracker {
    entries: BTreeMap<RecordId, RowModeEntry>,
    drafts: BTreeMap<RecordId, Record>,
}

impl EditModeTracker {
    pub fn entry(&self, id: RecordId) -> RowModeEntry {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    pub fn mode(&self, id: RecordId) -> RowMode {
        self.entry(id).mode
    }

    pub fn is_editing(&self, id: RecordId) -> bool {
        self.mode(id) == RowMode::Edit
    }

    /// Ids of every row currently in edit mode.
    pub fn editing(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.mode == RowMode::Edit)
            .map(|(&id, _)| id)
    }

    pub fn draft(&self, id: RecordId) -> Option<&Record> {
        self.drafts.get(&id)
    }

    /// `View -> Edit`. A row already in edit mode keeps its draft.
    pub fn start(&mut self, record: &Record) {
        if self.is_editing(record.id) {
            return;
        }
        self.entries.insert(
            record.id,
            RowModeEntry {
                mode: RowMode::Edit,
                discard: false,
            },
        );
        self.drafts.insert(record.id, record.clone());
    }

    /// Write one field of a draft. Ignored unless the row is in edit mode.
    pub fn set_draft_field(&mut self, id: RecordId, field: RecordField, value: String) -> bool {
        self.drafts
            .get_mut(&id)
            .is_some_and(|draft| draft.set_field(field, value))
    }

    /// `Edit -> View`, handing back the draft to commit.
    pub fn save(&mut self, id: RecordId) -> Option<Record> {
        if !self.is_editing(id) {
            return None;
        }
        self.entries.insert(
            id,
            RowModeEntry {
                mode: RowMode::View,
                discard: false,
            },
        );
        self.drafts.remove(&id)
    }

    /// `Edit -> View` with `discard` set; the draft is dropped.
    pub fn cancel(&mut self, id: RecordId) -> bool {
        if !self.is_editing(id) {
            return false;
        }
        self.entries.insert(
            id,
            RowModeEntry {
                mode: RowMode::View,
                discard: true,
            },
        );
        self.drafts.remove(&id);
        true
    }

    /// Forget a row entirely (after it was deleted).
    pub fn prune(&mut self, id: RecordId) {
        self.entries.remove(&id);
        self.drafts.remove(&id);
    }

    /// Keep only rows for which `keep` holds.
    pub fn retain(&mut self, mut keep: impl FnMut(RecordId) -> bool) {
        self.entries.retain(|&id, _| keep(id));
        self.drafts.retain(|id, _| self.entries.contains_key(id));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.drafts.clear();
    }

    /// Number of tracked rows, in any mode.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aaron() -> Record {
        Record::new(RecordId::new(1), "Aaron Miles", "aaron@mailinator.com", "member")
    }

    #[test]
    fn untouched_rows_are_in_view_mode() {
        let tracker = EditModeTracker::default();
        assert_eq!(tracker.entry(RecordId::new(1)), RowModeEntry::default());
        assert!(tracker.is_empty());
    }

    #[test]
    fn save_returns_edited_draft() {
        let mut tracker = EditModeTracker::default();
        tracker.start(&aaron());
        assert!(tracker.is_editing(RecordId::new(1)));
        assert!(tracker.set_draft_field(RecordId::new(1), RecordField::Role, "admin".into()));

        let committed = tracker.save(RecordId::new(1)).expect("draft");
        assert_eq!(committed.role, "admin");
        assert_eq!(tracker.mode(RecordId::new(1)), RowMode::View);
        assert!(!tracker.entry(RecordId::new(1)).discard);
        assert!(tracker.draft(RecordId::new(1)).is_none());
    }

    #[test]
    fn cancel_marks_discard() {
        let mut tracker = EditModeTracker::default();
        tracker.start(&aaron());
        tracker.set_draft_field(RecordId::new(1), RecordField::Name, "Nope".into());
        assert!(tracker.cancel(RecordId::new(1)));

        let entry = tracker.entry(RecordId::new(1));
        assert_eq!(entry.mode, RowMode::View);
        assert!(entry.discard);
        assert!(tracker.draft(RecordId::new(1)).is_none());
    }

    #[test]
    fn restart_clears_discard() {
        let mut tracker = EditModeTracker::default();
        tracker.start(&aaron());
        tracker.cancel(RecordId::new(1));
        tracker.start(&aaron());
        assert_eq!(
            tracker.entry(RecordId::new(1)),
            RowModeEntry {
                mode: RowMode::Edit,
                discard: false
            }
        );
    }

    #[test]
    fn second_start_keeps_draft() {
        let mut tracker = EditModeTracker::default();
        tracker.start(&aaron());
        tracker.set_draft_field(RecordId::new(1), RecordField::Name, "Draft".into());
        tracker.start(&aaron());
        assert_eq!(tracker.draft(RecordId::new(1)).unwrap().name, "Draft");
    }

    #[test]
    fn save_and_cancel_in_view_mode_are_noops() {
        let mut tracker = EditModeTracker::default();
        assert!(tracker.save(RecordId::new(1)).is_none());
        assert!(!tracker.cancel(RecordId::new(1)));
        assert!(tracker.is_empty());
        assert!(!tracker.set_draft_field(RecordId::new(1), RecordField::Name, "x".into()));
    }

    #[test]
    fn several_rows_may_edit_at_once() {
        let mut tracker = EditModeTracker::default();
        tracker.start(&aaron());
        tracker.start(&Record::new(RecordId::new(2), "b", "b", "b"));
        assert_eq!(tracker.editing().count(), 2);
        tracker.prune(RecordId::new(1));
        assert_eq!(tracker.editing().collect::<Vec<_>>(), vec![RecordId::new(2)]);
    }
}
