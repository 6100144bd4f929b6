use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// A single recorded income or expense event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// The `YYYY-MM` key this transaction falls under.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Unvalidated transaction input, before an id is assigned.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub note: String,
}

impl TransactionDraft {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerError::InvalidInput(
                "amount must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// The full persisted collection of transactions, the unit of load/save.
///
/// The `transactions` field is required on the wire so that imports of
/// arbitrary JSON documents are rejected instead of silently emptied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerDocument {
    pub transactions: Vec<Transaction>,
}

impl LedgerDocument {
    /// Next identifier by the max-plus-one rule over the current list.
    ///
    /// Recomputed from the live list rather than a persistent counter, so
    /// deleting the highest-id row frees that id for the next add.
    pub fn next_id(&self) -> u64 {
        self.transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Validates the draft, assigns an id, and appends the transaction.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<u64, LedgerError> {
        draft.validate()?;
        let id = self.next_id();
        self.transactions.push(Transaction {
            id,
            kind: draft.kind,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            note: draft.note,
        });
        Ok(id)
    }

    /// Removes the transaction with the given id, returning it when present.
    pub fn remove(&mut self, id: u64) -> Option<Transaction> {
        let idx = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(idx))
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}
