use crate::{
    core::{reports, TransactionFilter},
    domain::{LedgerDocument, Transaction, TransactionDraft},
    errors::{LedgerError, Result},
    storage::LedgerStore,
};

/// In-memory application state: the ledger document plus the active filter.
///
/// All mutation flows through here and is persisted via the store after the
/// in-memory change. A failed save is logged and degraded, not rolled back:
/// the session stays usable and the next successful save repairs the file.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    doc: LedgerDocument,
    filter: TransactionFilter,
}

impl AppState {
    pub fn new(doc: LedgerDocument) -> Self {
        Self {
            doc,
            filter: TransactionFilter::default(),
        }
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.doc
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.doc.transactions
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn set_month(&mut self, month: Option<String>) {
        self.filter.month = month;
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    /// Validates and appends the draft, persists, and returns the new id.
    pub fn add(&mut self, store: &dyn LedgerStore, draft: TransactionDraft) -> Result<u64> {
        let id = self.doc.add(draft)?;
        self.persist(store);
        Ok(id)
    }

    /// Removes a transaction by id; an unknown id fails with no side effects.
    pub fn remove(&mut self, store: &dyn LedgerStore, id: u64) -> Result<Transaction> {
        let removed = self
            .doc
            .remove(id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        self.persist(store);
        Ok(removed)
    }

    /// Replaces the whole document (the import path) and persists it.
    pub fn replace_document(&mut self, store: &dyn LedgerStore, doc: LedgerDocument) {
        self.doc = doc;
        self.persist(store);
    }

    /// The rows to display: filtered order when a filter is active, else the
    /// full list newest first.
    pub fn visible(&self) -> Vec<&Transaction> {
        if self.filter.is_active() {
            self.filter.apply(&self.doc.transactions)
        } else {
            reports::sort_newest_first(&self.doc.transactions)
        }
    }

    fn persist(&self, store: &dyn LedgerStore) {
        if let Err(err) = store.save(&self.doc) {
            tracing::error!(%err, "failed to persist ledger, data not saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use crate::storage::JsonStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    fn draft(kind: TransactionKind, category: &str, amount: f64, date: &str) -> TransactionDraft {
        TransactionDraft {
            kind,
            category: category.into(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn add_persists_and_returns_the_assigned_id() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        let id = state
            .add(&store, draft(TransactionKind::Income, "Salary", 2500.0, "2026-08-01"))
            .expect("add");
        assert_eq!(id, 1);
        assert_eq!(store.load(), *state.document());
    }

    #[test]
    fn invalid_draft_leaves_state_and_store_untouched() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        let err = state
            .add(&store, draft(TransactionKind::Expense, "Rent", -1.0, "2026-08-03"))
            .expect_err("must reject");
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert!(state.document().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn remove_of_unknown_id_fails_without_side_effects() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        state
            .add(&store, draft(TransactionKind::Expense, "Rent", 900.0, "2026-08-03"))
            .unwrap();
        let err = state.remove(&store, 42).expect_err("unknown id");
        assert!(matches!(err, LedgerError::TransactionNotFound(42)));
        assert_eq!(state.document().len(), 1);
    }

    #[test]
    fn visible_rows_are_newest_first_without_a_filter() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        state
            .add(&store, draft(TransactionKind::Expense, "Rent", 900.0, "2026-08-03"))
            .unwrap();
        state
            .add(&store, draft(TransactionKind::Income, "Freelance", 400.0, "2026-08-12"))
            .unwrap();
        let ids: Vec<u64> = state.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn active_filter_with_no_matches_shows_an_empty_table() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        state
            .add(&store, draft(TransactionKind::Expense, "Rent", 900.0, "2026-08-03"))
            .unwrap();
        state.set_search("groceries".into());
        assert!(state.visible().is_empty());
    }

    #[test]
    fn replace_document_swaps_state_and_persists() {
        let (store, _guard) = store_with_temp_dir();
        let mut state = AppState::default();
        let mut imported = LedgerDocument::default();
        imported
            .add(draft(TransactionKind::Income, "Salary", 2500.0, "2026-08-01"))
            .unwrap();
        state.replace_document(&store, imported.clone());
        assert_eq!(*state.document(), imported);
        assert_eq!(store.load(), imported);
    }
}
