use serde::Serialize;

use crate::ledger::transaction::Transaction;

/// Income/expense totals over one subset. No rounding is applied here;
/// display-time formatting owns precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;
    for transaction in transactions {
        if transaction.kind.is_income() {
            income += transaction.amount;
        } else {
            expense += transaction.amount;
        }
    }

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Partitions into (main, excluded) preserving relative order. The two
/// halves are summarized independently and never interact.
pub fn split_by_exclusion(transactions: &[Transaction]) -> (Vec<Transaction>, Vec<Transaction>) {
    let mut main = Vec::new();
    let mut excluded = Vec::new();
    for transaction in transactions {
        if transaction.exclude_from_main {
            excluded.push(transaction.clone());
        } else {
            main.push(transaction.clone());
        }
    }
    (main, excluded)
}
