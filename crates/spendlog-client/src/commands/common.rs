use std::path::Path;

use crate::contracts::types::{FilterEcho, TxnRow};
use crate::ledger::filter::FilterState;
use crate::ledger::store::LedgerStore;
use crate::ledger::transaction::Transaction;
use crate::storage::SqliteStore;
use crate::vocabulary::CategoryVocabulary;
use crate::{LedgerError, LedgerResult};

pub(crate) fn open_ledger(home_override: Option<&Path>) -> LedgerResult<LedgerStore> {
    let store = match home_override {
        Some(home) => SqliteStore::open_at(home)?,
        None => SqliteStore::open_default()?,
    };
    Ok(LedgerStore::open(
        Box::new(store),
        CategoryVocabulary::builtin(),
    ))
}

pub(crate) fn build_filter(
    category: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
    command: &str,
) -> LedgerResult<FilterState> {
    if let Some(value) = year
        && !is_four_digit_year(value)
    {
        return Err(LedgerError::invalid_argument_for_command(
            "`year` must use YYYY format.",
            Some(command),
        ));
    }
    if let Some(value) = month
        && !is_calendar_month(value)
    {
        return Err(LedgerError::invalid_argument_for_command(
            "`month` must be a two-digit value between 01 and 12.",
            Some(command),
        ));
    }

    Ok(FilterState::new(category, year, month))
}

pub(crate) fn filter_echo(filters: &FilterState) -> FilterEcho {
    FilterEcho {
        category: filters.category.clone(),
        year: non_empty(&filters.year),
        month: non_empty(&filters.month),
    }
}

pub(crate) fn txn_row(transaction: &Transaction) -> TxnRow {
    TxnRow {
        txn_id: transaction.id.clone(),
        amount: transaction.amount,
        category: transaction.category.clone(),
        category_label: transaction.category_label.clone(),
        kind: transaction.kind.as_str().to_string(),
        date: transaction.date.clone(),
        excluded: transaction.exclude_from_main,
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_four_digit_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_calendar_month(value: &str) -> bool {
    value.len() == 2
        && value.bytes().all(|byte| byte.is_ascii_digit())
        && value.parse::<u8>().is_ok_and(|month| (1..=12).contains(&month))
}
