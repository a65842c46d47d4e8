use crate::ledger::date::{extract_month, extract_year};
use crate::ledger::transaction::Transaction;

pub const CATEGORY_WILDCARD: &str = "all";

/// Conjunctive filter over the three independent dimensions. `all` and the
/// empty string are wildcards; there is no cross-validation between year
/// and month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub year: String,
    pub month: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CATEGORY_WILDCARD.to_string(),
            year: String::new(),
            month: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: Option<&str>, year: Option<&str>, month: Option<&str>) -> Self {
        Self {
            category: match category {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => CATEGORY_WILDCARD.to_string(),
            },
            year: year.unwrap_or_default().to_string(),
            month: month.unwrap_or_default().to_string(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CATEGORY_WILDCARD && self.year.is_empty() && self.month.is_empty()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let category_ok =
            self.category == CATEGORY_WILDCARD || transaction.category == self.category;
        let year_ok = self.year.is_empty() || extract_year(&transaction.date) == self.year;
        let month_ok = self.month.is_empty() || extract_month(&transaction.date) == self.month;
        category_ok && year_ok && month_ok
    }
}

/// Stable filter: relative order of the input is preserved and the result
/// is an owned copy, never an alias into ledger internals.
pub fn apply_filters(transactions: &[Transaction], filters: &FilterState) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| filters.matches(transaction))
        .cloned()
        .collect()
}
