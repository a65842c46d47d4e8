use std::fs;
use std::path::{Path, PathBuf};

use spendlog_client::ledger::store::{LedgerStore, TransactionInput};
use spendlog_client::storage::SqliteStore;
use spendlog_client::vocabulary::CategoryVocabulary;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn open_ledger(home: &Path) -> Option<LedgerStore> {
    let store = SqliteStore::open_at(home);
    assert!(store.is_ok());
    store
        .ok()
        .map(|backend| LedgerStore::open(Box::new(backend), CategoryVocabulary::builtin()))
}

pub fn input(
    amount: f64,
    category: &str,
    kind: &str,
    date: &str,
    exclude_from_main: bool,
) -> TransactionInput {
    TransactionInput {
        amount,
        category: category.to_string(),
        kind: kind.to_string(),
        date: date.to_string(),
        exclude_from_main,
    }
}
