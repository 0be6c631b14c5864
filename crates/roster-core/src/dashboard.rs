//! The dashboard state container.
//!
//! [`Dashboard`] owns the store, the query and its filtered view, the page
//! cursor, the edit-mode tracker and the selection. Fields are private and
//! every change goes through a transition method, so the invariants hold
//! after each call:
//!
//! - the filtered view is exactly the store records matching the query, in
//!   store order
//! - `1 <= current_page <= max(1, page_count)`
//! - every selected id is present in the store
//! - no edit entry or draft survives the deletion of its row

use std::fmt::Display;
use std::num::NonZeroUsize;

use roster_model::{Record, RecordField, RecordId};

use crate::action::GridAction;
use crate::edit_mode::{EditModeTracker, RowMode, RowModeEntry};
use crate::error::{DashboardError, Result};
use crate::filter::{SearchQuery, matching_indices};
use crate::paginate::{PageCursor, paginate};
use crate::selection::SelectionSet;
use crate::store::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: RecordStore,
    query: SearchQuery,
    /// Store positions of the records matching `query`.
    view: Vec<usize>,
    cursor: PageCursor,
    edits: EditModeTracker,
    selection: SelectionSet,
}

impl Dashboard {
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            cursor: PageCursor::new(page_size),
            ..Self::default()
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn edits(&self) -> &EditModeTracker {
        &self.edits
    }

    pub fn row_mode(&self, id: RecordId) -> RowMode {
        self.edits.mode(id)
    }

    pub fn row_entry(&self, id: RecordId) -> RowModeEntry {
        self.edits.entry(id)
    }

    pub fn draft(&self, id: RecordId) -> Option<&Record> {
        self.edits.draft(id)
    }

    /// Records matching the current query, in store order.
    pub fn filtered(&self) -> impl Iterator<Item = &Record> {
        let records = self.store.as_slice();
        self.view.iter().map(move |&index| &records[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn page_count(&self) -> usize {
        crate::paginate::page_count(self.view.len(), self.cursor.page_size())
    }

    /// Records on the current page.
    pub fn page_rows(&self) -> Vec<&Record> {
        let records = self.store.as_slice();
        paginate(&self.view, &self.cursor)
            .iter()
            .map(|&index| &records[index])
            .collect()
    }

    pub fn page_ids(&self) -> Vec<RecordId> {
        self.page_rows().into_iter().map(|r| r.id).collect()
    }

    /// True when the current page has rows and every one is selected.
    pub fn page_fully_selected(&self) -> bool {
        let ids = self.page_ids();
        !ids.is_empty() && ids.iter().all(|&id| self.selection.contains(id))
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Install the outcome of the remote fetch.
    ///
    /// On success the collection and its filtered view are replaced together
    /// and per-session state (selection, edits, cursor) starts over. On
    /// failure, including a body with duplicate ids, the dashboard is left
    /// empty and the failure is handed back.
    pub fn apply_fetch<E: Display>(
        &mut self,
        result: std::result::Result<Vec<Record>, E>,
    ) -> Result<usize> {
        let loaded = result
            .map_err(|e| e.to_string())
            .and_then(|records| RecordStore::from_records(records).map_err(|e| e.to_string()));

        self.edits.clear();
        self.selection.clear();
        self.cursor.reset();

        match loaded {
            Ok(store) => {
                self.store = store;
                self.refresh_view();
                tracing::info!(
                    records = self.store.len(),
                    visible = self.view.len(),
                    "Loaded member records"
                );
                Ok(self.store.len())
            }
            Err(reason) => {
                self.store.clear();
                self.view.clear();
                tracing::error!("Failed to load member records: {}", reason);
                Err(DashboardError::FetchFailed { reason })
            }
        }
    }

    // =========================================================================
    // Search and paging
    // =========================================================================

    /// Commit a new query. The view is recomputed and paging restarts at 1.
    pub fn set_query(&mut self, query: &str) {
        self.query = SearchQuery::new(query);
        self.refresh_view();
        self.cursor.reset();
        tracing::debug!(query, matches = self.view.len(), "Search query committed");
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.cursor.go_to(page, self.view.len());
    }

    pub fn next_page(&mut self) {
        self.cursor.next(self.view.len());
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous();
    }

    pub fn first_page(&mut self) {
        self.cursor.first();
    }

    pub fn last_page(&mut self) {
        self.cursor.last(self.view.len());
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.cursor.set_page_size(page_size, self.view.len());
    }

    // =========================================================================
    // Row edit mode
    // =========================================================================

    /// `View -> Edit` for a row present in the store.
    pub fn start_edit(&mut self, id: RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.edits.start(record);
                tracing::debug!(%id, "Row entered edit mode");
                true
            }
            None => false,
        }
    }

    pub fn set_draft_field(&mut self, id: RecordId, field: RecordField, value: String) -> bool {
        self.edits.set_draft_field(id, field, value)
    }

    /// `Edit -> View`, committing the row's draft into the store.
    pub fn save_edit(&mut self, id: RecordId) -> bool {
        let Some(draft) = self.edits.save(id) else {
            return false;
        };
        let committed = self.store.replace(draft);
        if committed {
            self.refresh_view();
        }
        tracing::debug!(%id, committed, "Row edit saved");
        committed
    }

    /// `Edit -> View`, discarding the row's draft.
    pub fn cancel_edit(&mut self, id: RecordId) -> bool {
        let cancelled = self.edits.cancel(id);
        if cancelled {
            tracing::debug!(%id, "Row edit cancelled");
        }
        cancelled
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flip the selection of one row. Unknown ids are ignored.
    pub fn toggle_select(&mut self, id: RecordId) -> bool {
        if !self.store.contains(id) {
            tracing::debug!(%id, "Ignoring selection of unknown row");
            return false;
        }
        self.selection.toggle(id)
    }

    /// Replace the selection, admitting only ids present in the store.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        let store = &self.store;
        self.selection
            .replace(ids.into_iter().filter(|&id| store.contains(id)));
    }

    /// Header checkbox: deselect the page when it is fully selected,
    /// otherwise add every row of the page to the selection.
    pub fn toggle_page_selection(&mut self) {
        let ids = self.page_ids();
        if self.page_fully_selected() {
            ids.into_iter().for_each(|id| self.selection.remove(id));
        } else {
            ids.into_iter().for_each(|id| self.selection.insert(id));
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Delete one row. Deleting an absent id changes nothing.
    pub fn delete_one(&mut self, id: RecordId) -> bool {
        let removed = self.store.remove(id).is_some();
        self.selection.remove(id);
        self.edits.prune(id);
        if removed {
            self.refresh_view();
            tracing::info!(%id, "Deleted member record");
        }
        removed
    }

    /// Delete every selected row and clear the selection.
    ///
    /// With nothing selected this changes nothing and reports
    /// [`DashboardError::EmptySelection`].
    pub fn delete_selected(&mut self) -> Result<usize> {
        if self.selection.is_empty() {
            tracing::warn!("No rows selected for deletion");
            return Err(DashboardError::EmptySelection);
        }

        let removed = self.store.remove_all(self.selection.as_set());
        let selection = &self.selection;
        self.edits.retain(|id| !selection.contains(id));
        self.selection.clear();
        self.refresh_view();

        tracing::info!(removed, "Deleted selected member records");
        Ok(removed)
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Route a grid event to its handler.
    pub fn apply(&mut self, action: GridAction) -> Result<()> {
        match action {
            GridAction::EditStart(id) => {
                self.start_edit(id);
            }
            GridAction::DraftChanged { id, field, value } => {
                self.set_draft_field(id, field, value);
            }
            GridAction::SaveEdit(id) => {
                self.save_edit(id);
            }
            GridAction::CancelEdit(id) => {
                self.cancel_edit(id);
            }
            GridAction::DeleteRow(id) => {
                self.delete_one(id);
            }
            GridAction::ToggleSelect(id) => {
                self.toggle_select(id);
            }
            GridAction::SelectAll(ids) => self.select_all(ids),
            GridAction::QueryChanged(query) => self.set_query(&query),
            GridAction::DeleteSelectedRequested => {
                self.delete_selected()?;
            }
            GridAction::PageChanged(page) => self.go_to_page(page),
        }
        Ok(())
    }

    /// Recompute the filtered view from the store and pull the cursor back
    /// onto an existing page.
    fn refresh_view(&mut self) {
        self.view = matching_indices(self.store.as_slice(), &self.query);
        self.cursor.clamp(self.view.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: u64) -> Dashboard {
        let records = (1..=count)
            .map(|i| {
                Record::new(
                    RecordId::new(i),
                    format!("User {i}"),
                    format!("user{i}@mailinator.com"),
                    if i % 2 == 0 { "admin" } else { "member" },
                )
            })
            .collect();
        let mut dashboard = Dashboard::default();
        dashboard.apply_fetch(Ok::<_, String>(records)).unwrap();
        dashboard
    }

    #[test]
    fn saving_an_edit_refilters() {
        let mut dashboard = loaded(4);
        dashboard.set_query("admin");
        assert_eq!(dashboard.filtered_len(), 2);

        let id = RecordId::new(2);
        assert!(dashboard.start_edit(id));
        dashboard.set_draft_field(id, RecordField::Role, "member".into());
        // draft edits are not visible until saved
        assert_eq!(dashboard.filtered_len(), 2);

        assert!(dashboard.save_edit(id));
        assert_eq!(dashboard.filtered_len(), 1);
        assert_eq!(dashboard.store().get(id).unwrap().role, "member");
    }

    #[test]
    fn cancelling_leaves_store_untouched() {
        let mut dashboard = loaded(2);
        let id = RecordId::new(1);
        dashboard.start_edit(id);
        dashboard.set_draft_field(id, RecordField::Name, "Changed".into());
        assert!(dashboard.cancel_edit(id));
        assert_eq!(dashboard.store().get(id).unwrap().name, "User 1");
        assert!(dashboard.row_entry(id).discard);
    }

    #[test]
    fn edit_start_on_unknown_row_is_ignored() {
        let mut dashboard = loaded(2);
        assert!(!dashboard.start_edit(RecordId::new(9)));
        assert!(dashboard.edits().is_empty());
    }

    #[test]
    fn page_selection_toggles() {
        let mut dashboard = loaded(12);
        dashboard.toggle_page_selection();
        assert_eq!(dashboard.selection().len(), 10);
        assert!(dashboard.page_fully_selected());

        dashboard.toggle_page_selection();
        assert!(dashboard.selection().is_empty());
    }

    #[test]
    fn page_selection_keeps_other_pages() {
        let mut dashboard = loaded(12);
        dashboard.toggle_select(RecordId::new(11));
        dashboard.toggle_page_selection();
        assert_eq!(dashboard.selection().len(), 11);
        dashboard.toggle_page_selection();
        assert_eq!(
            dashboard.selection().iter().collect::<Vec<_>>(),
            vec![RecordId::new(11)]
        );
    }

    #[test]
    fn delete_clamps_cursor() {
        let mut dashboard = loaded(11);
        dashboard.last_page();
        assert_eq!(dashboard.cursor().current_page(), 2);
        dashboard.delete_one(RecordId::new(11));
        assert_eq!(dashboard.cursor().current_page(), 1);
        assert_eq!(dashboard.page_rows().len(), 10);
    }
}
