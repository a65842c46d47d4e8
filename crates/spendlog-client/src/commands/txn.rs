use std::path::Path;

use crate::LedgerResult;
use crate::commands::common::{build_filter, filter_echo, open_ledger, txn_row};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TxnAddData, TxnEditData, TxnListData, TxnRemoveData};
use crate::ledger::store::{TransactionInput, validate_input};

#[derive(Debug, Default)]
pub struct AddOptions<'a> {
    pub input: TransactionInput,
    pub home_override: Option<&'a Path>,
}

pub fn add(input: TransactionInput) -> LedgerResult<SuccessEnvelope> {
    add_with_options(AddOptions {
        input,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: AddOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    validate_input(&options.input, "txn add")?;
    let mut ledger = open_ledger(options.home_override)?;
    let transaction = ledger.create(&options.input);
    success(
        "txn add",
        TxnAddData {
            row: txn_row(&transaction),
        },
    )
}

#[derive(Debug, Default)]
pub struct EditOptions<'a> {
    pub txn_id: String,
    pub input: TransactionInput,
    pub home_override: Option<&'a Path>,
}

pub fn edit(txn_id: &str, input: TransactionInput) -> LedgerResult<SuccessEnvelope> {
    edit_with_options(EditOptions {
        txn_id: txn_id.to_string(),
        input,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn edit_with_options(options: EditOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    validate_input(&options.input, "txn edit")?;
    let mut ledger = open_ledger(options.home_override)?;
    let replaced = ledger.update(&options.txn_id, &options.input);
    success(
        "txn edit",
        TxnEditData {
            txn_id: options.txn_id,
            updated: replaced.is_some(),
            row: replaced.as_ref().map(txn_row),
        },
    )
}

#[derive(Debug, Default)]
pub struct RemoveOptions<'a> {
    pub txn_id: String,
    pub home_override: Option<&'a Path>,
}

pub fn remove(txn_id: &str) -> LedgerResult<SuccessEnvelope> {
    remove_with_options(RemoveOptions {
        txn_id: txn_id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn remove_with_options(options: RemoveOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let mut ledger = open_ledger(options.home_override)?;
    let removed = ledger.remove(&options.txn_id);
    success(
        "txn remove",
        TxnRemoveData {
            txn_id: options.txn_id,
            removed,
        },
    )
}

#[derive(Debug, Default)]
pub struct ListOptions<'a> {
    pub category: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn list(
    category: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
) -> LedgerResult<SuccessEnvelope> {
    list_with_options(ListOptions {
        category: category.map(std::string::ToString::to_string),
        year: year.map(std::string::ToString::to_string),
        month: month.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: ListOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let filters = build_filter(
        options.category.as_deref(),
        options.year.as_deref(),
        options.month.as_deref(),
        "txn list",
    )?;
    let ledger = open_ledger(options.home_override)?;
    let view = ledger.derive_view(&filters);

    success(
        "txn list",
        TxnListData {
            filters: filter_echo(&filters),
            total: view.transactions.len(),
            years: ledger.years(),
            rows: view.transactions.iter().map(txn_row).collect(),
        },
    )
}
