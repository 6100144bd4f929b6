pub mod json_store;

use std::path::Path;

use crate::{domain::LedgerDocument, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the single ledger document.
///
/// `load` is deliberately infallible: a missing or unreadable document is
/// degraded to the empty document and logged, never surfaced.
pub trait LedgerStore {
    fn load(&self) -> LedgerDocument;
    fn save(&self, doc: &LedgerDocument) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn seed_if_empty(&self) -> LedgerDocument;
    fn export_to_path(&self, doc: &LedgerDocument, path: &Path) -> Result<()>;
    fn import_from_path(&self, path: &Path) -> Result<LedgerDocument>;
}

pub use json_store::JsonStore;
