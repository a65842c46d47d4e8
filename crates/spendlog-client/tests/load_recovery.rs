use std::path::Path;

use spendlog_client::ledger::filter::FilterState;
use spendlog_client::ledger::store::{LedgerStore, STORAGE_KEY, TransactionInput};
use spendlog_client::storage::{KeyValueStore, MemoryStore};
use spendlog_client::vocabulary::CategoryVocabulary;
use spendlog_client::{LedgerError, LedgerResult};

fn ledger_with_payload(payload: &str) -> LedgerStore {
    let store = MemoryStore::with_entry(STORAGE_KEY, payload);
    LedgerStore::open(Box::new(store), CategoryVocabulary::builtin())
}

#[test]
fn unparseable_payload_recovers_as_an_empty_ledger() {
    let ledger = ledger_with_payload("{definitely not json");
    assert!(ledger.is_empty());
}

#[test]
fn non_array_payload_recovers_as_an_empty_ledger() {
    let ledger = ledger_with_payload("{\"id\": \"txn_1\"}");
    assert!(ledger.is_empty());

    let ledger = ledger_with_payload("42");
    assert!(ledger.is_empty());
}

#[test]
fn absent_key_starts_an_empty_ledger() {
    let ledger = LedgerStore::open(Box::new(MemoryStore::new()), CategoryVocabulary::builtin());
    assert!(ledger.is_empty());
}

#[test]
fn loosely_typed_stored_records_are_normalized_on_load() {
    let payload = r#"[
        {"id": "txn_a", "amount": "42.15", "category": "food", "type": "expense", "date": "2024-01-20", "excludeFromMain": 1},
        {"id": "txn_b", "amount": 100, "category": "consulting", "type": "transfer", "date": "2024-01-15", "excludeFromMain": null},
        {"id": "txn_c", "amount": 7.5, "category": "", "type": "income", "date": "2024-02-01"}
    ]"#;
    let ledger = ledger_with_payload(payload);

    assert_eq!(ledger.len(), 3);
    let transactions = ledger.transactions();

    // String amount parses; numeric truthiness drives the exclusion flag.
    assert_eq!(transactions[0].amount, 42.15);
    assert!(transactions[0].exclude_from_main);
    assert_eq!(transactions[0].category_label, "Food");

    // Unknown kind collapses to expense; unknown category keeps its raw
    // value as the label.
    assert!(!transactions[1].kind.is_income());
    assert_eq!(transactions[1].category_label, "consulting");
    assert!(!transactions[1].exclude_from_main);

    // Missing exclusion flag defaults false; empty category labels Unknown.
    assert!(transactions[2].kind.is_income());
    assert_eq!(transactions[2].category_label, "Unknown");
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> LedgerResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> LedgerResult<()> {
        Err(LedgerError::ledger_locked(Path::new("/tmp/spendlog.db")))
    }
}

#[test]
fn write_failures_leave_the_in_memory_session_authoritative() {
    let mut ledger = LedgerStore::open(Box::new(FailingStore), CategoryVocabulary::builtin());

    let created = ledger.create(&TransactionInput {
        amount: 10.0,
        category: "food".to_string(),
        kind: "expense".to_string(),
        date: "2024-01-20".to_string(),
        exclude_from_main: false,
    });

    // The write failed silently; the session keeps working on memory.
    assert_eq!(ledger.len(), 1);
    let view = ledger.derive_view(&FilterState::default());
    assert_eq!(view.main_summary.expense, 10.0);

    assert!(ledger.remove(&created.id));
    assert!(ledger.is_empty());
}

struct BrokenReadStore;

impl KeyValueStore for BrokenReadStore {
    fn get(&self, _key: &str) -> LedgerResult<Option<String>> {
        Err(LedgerError::ledger_corrupt(Path::new("/tmp/spendlog.db")))
    }

    fn set(&mut self, _key: &str, _value: &str) -> LedgerResult<()> {
        Ok(())
    }
}

#[test]
fn read_failures_at_open_recover_as_an_empty_ledger() {
    let ledger = LedgerStore::open(Box::new(BrokenReadStore), CategoryVocabulary::builtin());
    assert!(ledger.is_empty());
}
