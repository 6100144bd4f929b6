//! Pure aggregation over the transaction list.
//!
//! Everything here is a function of the data with no presentation concerns,
//! so totals, monthly flows, and category breakdowns are testable on their
//! own. Every call recomputes from the full list; the data sizes involved do
//! not justify caching.

use std::collections::BTreeMap;

use crate::domain::Transaction;

/// Income and expense sums over a transaction list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }

    pub fn is_overdrawn(&self) -> bool {
        self.balance() < 0.0
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut sums = Totals::default();
    for txn in transactions {
        if txn.is_income() {
            sums.income += txn.amount;
        } else {
            sums.expense += txn.amount;
        }
    }
    sums
}

/// Distinct `YYYY-MM` keys present in the data, newest first.
pub fn months(transactions: &[Transaction]) -> Vec<String> {
    let keys: BTreeMap<String, ()> = transactions
        .iter()
        .map(|t| (t.month_key(), ()))
        .collect();
    keys.into_keys().rev().collect()
}

/// Income and expense sums for one month, the chart's unit of display.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyFlow {
    pub fn total(&self) -> f64 {
        self.income + self.expense
    }
}

/// Per-month income/expense sums, months ascending.
pub fn monthly_flows(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut by_month: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for txn in transactions {
        let entry = by_month.entry(txn.month_key()).or_default();
        if txn.is_income() {
            entry.0 += txn.amount;
        } else {
            entry.1 += txn.amount;
        }
    }
    by_month
        .into_iter()
        .map(|(month, (income, expense))| MonthlyFlow {
            month,
            income,
            expense,
        })
        .collect()
}

/// Net spend for one category: expenses count positively, income nets out.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub net: f64,
}

impl CategorySpend {
    /// The displayed figure is the absolute value of the net.
    pub fn spend(&self) -> f64 {
        self.net.abs()
    }
}

/// Per-category spending, largest displayed figure first.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for txn in transactions {
        let signed = if txn.is_income() {
            -txn.amount
        } else {
            txn.amount
        };
        *by_category.entry(txn.category.clone()).or_default() += signed;
    }
    let mut entries: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, net)| CategorySpend { category, net })
        .collect();
    // BTreeMap iteration keeps ties in name order.
    entries.sort_by(|a, b| {
        b.spend()
            .partial_cmp(&a.spend())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}

/// Display order for the unfiltered table: newest first.
pub fn sort_newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn txn(id: u64, kind: TransactionKind, category: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id,
            kind,
            category: category.into(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            note: String::new(),
        }
    }

    fn seed() -> Vec<Transaction> {
        vec![
            txn(1, TransactionKind::Income, "Salary", 2500.0, "2026-08-01"),
            txn(2, TransactionKind::Expense, "Rent", 900.0, "2026-08-03"),
            txn(3, TransactionKind::Expense, "Groceries", 160.45, "2026-08-07"),
            txn(4, TransactionKind::Expense, "Transport", 45.2, "2026-08-09"),
            txn(5, TransactionKind::Income, "Freelance", 400.0, "2026-08-12"),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn seed_data_totals_match_the_known_figures() {
        let sums = totals(&seed());
        assert!(close(sums.income, 2900.0));
        assert!(close(sums.expense, 1105.65));
        assert!(close(sums.balance(), 1794.35));
        assert!(!sums.is_overdrawn());
    }

    #[test]
    fn removing_rent_shifts_expense_and_balance() {
        let txns: Vec<Transaction> = seed().into_iter().filter(|t| t.id != 2).collect();
        let sums = totals(&txns);
        assert!(close(sums.expense, 205.65));
        assert!(close(sums.balance(), 2694.35));
    }

    #[test]
    fn balance_goes_negative_when_expenses_dominate() {
        let txns = vec![
            txn(1, TransactionKind::Income, "Salary", 100.0, "2026-01-01"),
            txn(2, TransactionKind::Expense, "Rent", 900.0, "2026-01-03"),
        ];
        let sums = totals(&txns);
        assert!(sums.is_overdrawn());
        assert!(close(sums.balance(), -800.0));
    }

    #[test]
    fn months_are_distinct_and_newest_first() {
        let mut txns = seed();
        txns.push(txn(6, TransactionKind::Expense, "Rent", 900.0, "2026-09-03"));
        txns.push(txn(7, TransactionKind::Expense, "Rent", 900.0, "2026-07-03"));
        assert_eq!(months(&txns), vec!["2026-09", "2026-08", "2026-07"]);
    }

    #[test]
    fn monthly_flows_aggregate_per_month_ascending() {
        let mut txns = seed();
        txns.push(txn(6, TransactionKind::Income, "Salary", 2500.0, "2026-09-01"));
        let flows = monthly_flows(&txns);
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].month, "2026-08");
        assert!(close(flows[0].income, 2900.0));
        assert!(close(flows[0].expense, 1105.65));
        assert_eq!(flows[1].month, "2026-09");
        assert!(close(flows[1].income, 2500.0));
        assert!(close(flows[1].expense, 0.0));
    }

    #[test]
    fn category_breakdown_sorts_by_displayed_spend() {
        let spends = category_breakdown(&seed());
        let order: Vec<&str> = spends.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Salary", "Rent", "Freelance", "Groceries", "Transport"]);
        // Income-only categories net negative but display their magnitude.
        assert!(close(spends[0].net, -2500.0));
        assert!(close(spends[0].spend(), 2500.0));
    }

    #[test]
    fn category_nets_income_against_expenses() {
        let txns = vec![
            txn(1, TransactionKind::Expense, "Travel", 300.0, "2026-03-01"),
            txn(2, TransactionKind::Income, "Travel", 120.0, "2026-03-05"),
        ];
        let spends = category_breakdown(&txns);
        assert_eq!(spends.len(), 1);
        assert!(close(spends[0].net, 180.0));
    }

    #[test]
    fn newest_first_ordering_is_by_date_descending() {
        let txns = seed();
        let sorted = sort_newest_first(&txns);
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }
}
