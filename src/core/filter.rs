use crate::domain::Transaction;

/// The active month/search predicates, ANDed together.
///
/// `month` is a `YYYY-MM` prefix (`None` matches every month); the search
/// term is matched case-insensitively as a substring of the note or the
/// category, and an empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub month: Option<String>,
    pub search: String,
}

impl TransactionFilter {
    pub fn is_active(&self) -> bool {
        self.month.is_some() || !self.search.trim().is_empty()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(month) = &self.month {
            if txn.month_key() != *month {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        txn.note.to_lowercase().contains(&needle) || txn.category.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;

    fn txn(id: u64, category: &str, note: &str, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            id,
            kind: TransactionKind::Expense,
            category: category.into(),
            amount: 10.0,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            note: note.into(),
        }
    }

    fn fixtures() -> Vec<Transaction> {
        vec![
            txn(1, "Rent", "Apartment rent", (2024, 1, 3)),
            txn(2, "Groceries", "Weekly shop", (2024, 1, 7)),
            txn(3, "Groceries", "", (2024, 2, 2)),
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let txns = fixtures();
        let filter = TransactionFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&txns).len(), 3);
    }

    #[test]
    fn month_filter_keeps_only_that_prefix() {
        let txns = fixtures();
        let filter = TransactionFilter {
            month: Some("2024-01".into()),
            search: String::new(),
        };
        let kept = filter.apply(&txns);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|t| t.month_key() == "2024-01"));
    }

    #[test]
    fn search_is_case_insensitive_over_note_and_category() {
        let txns = fixtures();
        let filter = TransactionFilter {
            month: None,
            search: "GROC".into(),
        };
        assert_eq!(filter.apply(&txns).len(), 2);

        let filter = TransactionFilter {
            month: None,
            search: "apartment".into(),
        };
        assert_eq!(filter.apply(&txns).len(), 1);
    }

    #[test]
    fn month_and_search_are_anded() {
        let txns = fixtures();
        let filter = TransactionFilter {
            month: Some("2024-02".into()),
            search: "groceries".into(),
        };
        let kept = filter.apply(&txns);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 3);
    }

    #[test]
    fn whitespace_search_counts_as_empty() {
        let filter = TransactionFilter {
            month: None,
            search: "   ".into(),
        };
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&fixtures()).len(), 3);
    }
}
