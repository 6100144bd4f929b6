pub mod transaction;

pub use transaction::{LedgerDocument, Transaction, TransactionDraft, TransactionKind};
