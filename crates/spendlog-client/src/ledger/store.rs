use serde::Serialize;
use serde_json::json;
use ulid::Ulid;

use crate::ledger::charts::{
    CategoryBreakdown, MonthlySeries, build_category_breakdown, build_monthly_series,
};
use crate::ledger::date::{extract_year, parse_iso_date_strict};
use crate::ledger::filter::{FilterState, apply_filters};
use crate::ledger::summary::{Summary, compute_summary, split_by_exclusion};
use crate::ledger::transaction::{
    RawRecord, Transaction, TransactionKind, normalize, resolve_label,
};
use crate::storage::KeyValueStore;
use crate::vocabulary::CategoryVocabulary;
use crate::{LedgerError, LedgerResult};

pub const STORAGE_KEY: &str = "spendlog:transactions";

/// Validated mutation input for create/update. Field checks happen in
/// [`validate_input`] before the store is touched; the store itself only
/// ever sees inputs that already passed.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub amount: f64,
    pub category: String,
    pub kind: String,
    pub date: String,
    pub exclude_from_main: bool,
}

/// One complete derived read: the filtered sequence, both summaries, and
/// both chart datasets, all freshly computed owned copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerView {
    pub transactions: Vec<Transaction>,
    pub main_summary: Summary,
    pub excluded_summary: Summary,
    pub category_breakdown: CategoryBreakdown,
    pub monthly_series: MonthlySeries,
}

/// Exclusive owner of the ordered transaction collection. Every mutation
/// persists the full serialized ledger and completes before the next event
/// runs; derived views are recomputed from scratch on each read.
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    vocabulary: CategoryVocabulary,
    store: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    /// Loads the persisted payload once and normalizes every record. Any
    /// load failure is logged and recovered as an empty ledger.
    pub fn open(store: Box<dyn KeyValueStore>, vocabulary: CategoryVocabulary) -> Self {
        let transactions = load_transactions(store.as_ref(), &vocabulary);
        Self {
            transactions,
            vocabulary,
            store,
        }
    }

    /// Normalizes with a fresh id and prepends: the ledger is ordered
    /// newest-first by insertion, not by date.
    pub fn create(&mut self, input: &TransactionInput) -> Transaction {
        let record = raw_record(format!("txn_{}", Ulid::new()), input);
        let transaction = normalize(&record, &self.vocabulary);
        self.transactions.insert(0, transaction.clone());
        self.persist_best_effort();
        transaction
    }

    /// Identity-preserving in-place replacement. An unknown id is a no-op
    /// and triggers no persistence write.
    pub fn update(&mut self, id: &str, input: &TransactionInput) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;
        let record = raw_record(id.to_string(), input);
        let replacement = normalize(&record, &self.vocabulary);
        self.transactions[index] = replacement.clone();
        self.persist_best_effort();
        Some(replacement)
    }

    /// Removes the first (only) entry with the given id. Unknown ids are a
    /// no-op and trigger no persistence write.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            return false;
        };
        self.transactions.remove(index);
        self.persist_best_effort();
        true
    }

    /// Pure read. Charts only ever see the main (non-excluded) slice of the
    /// filtered set.
    pub fn derive_view(&self, filters: &FilterState) -> LedgerView {
        let transactions = apply_filters(&self.transactions, filters);
        let (main, excluded) = split_by_exclusion(&transactions);

        LedgerView {
            main_summary: compute_summary(&main),
            excluded_summary: compute_summary(&excluded),
            category_breakdown: build_category_breakdown(&main),
            monthly_series: build_monthly_series(&main),
            transactions,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct years present in the ledger, newest first. Drives the year
    /// filter options in frontends.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = Vec::new();
        for transaction in &self.transactions {
            let year = extract_year(&transaction.date);
            if !year.is_empty() && !years.iter().any(|seen| seen == year) {
                years.push(year.to_string());
            }
        }
        years.sort_by(|left, right| right.cmp(left));
        years
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// Swaps the vocabulary and re-resolves every cached label so the
    /// denormalized `category_label` field stays consistent, then persists.
    pub fn set_vocabulary(&mut self, vocabulary: CategoryVocabulary) {
        self.vocabulary = vocabulary;
        for transaction in &mut self.transactions {
            transaction.category_label = resolve_label(&self.vocabulary, &transaction.category);
        }
        self.persist_best_effort();
    }

    /// Durability is best-effort: a failed write is logged and the
    /// in-memory ledger stays authoritative for the rest of the session.
    fn persist_best_effort(&mut self) {
        let payload = match serde_json::to_string(&self.transactions) {
            Ok(payload) => payload,
            Err(error) => {
                log::warn!("ledger serialization failed, keeping in-memory state only: {error}");
                return;
            }
        };
        if let Err(error) = self.store.set(STORAGE_KEY, &payload) {
            log::warn!("ledger write failed, keeping in-memory state only: {error}");
        }
    }
}

/// Rejects invalid mutation input before it can reach the store: finite
/// non-negative amount, non-empty category, strict kind, and a real
/// calendar date.
pub fn validate_input(input: &TransactionInput, command: &str) -> LedgerResult<()> {
    if !input.amount.is_finite() || input.amount < 0.0 {
        return Err(LedgerError::invalid_argument_for_command(
            "`amount` must be a non-negative number.",
            Some(command),
        ));
    }
    if input.category.trim().is_empty() {
        return Err(LedgerError::invalid_argument_for_command(
            "`category` is required.",
            Some(command),
        ));
    }
    if TransactionKind::parse(&input.kind).is_none() {
        return Err(LedgerError::invalid_argument_for_command(
            "`kind` must be `income` or `expense`.",
            Some(command),
        ));
    }
    parse_iso_date_strict(&input.date, "date", command)?;
    Ok(())
}

fn raw_record(id: String, input: &TransactionInput) -> RawRecord {
    RawRecord {
        id,
        amount: json!(input.amount),
        category: input.category.clone(),
        kind: input.kind.clone(),
        date: input.date.clone(),
        exclude_from_main: json!(input.exclude_from_main),
    }
}

fn load_transactions(
    store: &dyn KeyValueStore,
    vocabulary: &CategoryVocabulary,
) -> Vec<Transaction> {
    let payload = match store.get(STORAGE_KEY) {
        Ok(payload) => payload,
        Err(error) => {
            log::warn!("ledger read failed, starting empty: {error}");
            return Vec::new();
        }
    };
    let Some(raw) = payload else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<RawRecord>>(&raw) {
        Ok(records) => records
            .iter()
            .map(|record| normalize(record, vocabulary))
            .collect(),
        Err(error) => {
            log::warn!("discarding unreadable ledger payload, starting empty: {error}");
            Vec::new()
        }
    }
}
