use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::vocabulary::CategoryVocabulary;

pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Lossy mapping for untrusted input: anything that is not exactly
    /// `income` collapses to expense, so corrupt records are kept rather
    /// than dropped.
    pub fn coerce(raw: &str) -> Self {
        if raw == "income" {
            Self::Income
        } else {
            Self::Expense
        }
    }

    /// Strict mapping for validated input paths.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub const fn is_income(self) -> bool {
        matches!(self, Self::Income)
    }
}

/// Canonical transaction record. Immutable once normalized; edits replace
/// the whole record under the same id.
///
/// The serialized form uses the persisted payload's camelCase field names,
/// so a serialized ledger deserializes back as loose [`RawRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub category_label: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
    pub exclude_from_main: bool,
}

/// Loosely-typed record shape accepted by [`normalize`]: every field is
/// optional and `amount`/`excludeFromMain` may hold any JSON value. This is
/// what the persisted payload deserializes into.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub exclude_from_main: Value,
}

/// Pure function of the record and the current vocabulary snapshot.
/// Coercions never reject: validation of user-facing mutations happens
/// before records reach this point, and stored data is kept as-is.
pub fn normalize(raw: &RawRecord, vocabulary: &CategoryVocabulary) -> Transaction {
    Transaction {
        id: raw.id.clone(),
        amount: coerce_amount(&raw.amount),
        category: raw.category.clone(),
        category_label: resolve_label(vocabulary, &raw.category),
        kind: TransactionKind::coerce(&raw.kind),
        date: raw.date.clone(),
        exclude_from_main: coerce_flag(&raw.exclude_from_main),
    }
}

/// Vocabulary label, falling back to the raw category value, then to the
/// literal `Unknown` for an empty category.
pub fn resolve_label(vocabulary: &CategoryVocabulary, category: &str) -> String {
    match vocabulary.label_for(category) {
        Some(label) => label.to_string(),
        None if category.is_empty() => UNKNOWN_CATEGORY_LABEL.to_string(),
        None => category.to_string(),
    }
}

fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        _ => f64::NAN,
    }
}

fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Null => false,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::vocabulary::CategoryVocabulary;

    use super::{RawRecord, Transaction, TransactionKind, UNKNOWN_CATEGORY_LABEL, normalize};

    fn raw(amount: serde_json::Value, category: &str, kind: &str) -> RawRecord {
        RawRecord {
            id: "txn_1".to_string(),
            amount,
            category: category.to_string(),
            kind: kind.to_string(),
            date: "2024-01-15".to_string(),
            exclude_from_main: serde_json::Value::Bool(false),
        }
    }

    #[test]
    fn unknown_kind_collapses_to_expense() {
        let vocabulary = CategoryVocabulary::builtin();
        for kind in ["expense", "", "Income", "transfer", "INCOME"] {
            let normalized = normalize(&raw(json!(1.0), "food", kind), &vocabulary);
            assert_eq!(normalized.kind, TransactionKind::Expense, "kind: {kind:?}");
        }

        let normalized = normalize(&raw(json!(1.0), "food", "income"), &vocabulary);
        assert_eq!(normalized.kind, TransactionKind::Income);
    }

    #[test]
    fn label_falls_back_to_raw_category_then_unknown() {
        let vocabulary = CategoryVocabulary::builtin();

        let known = normalize(&raw(json!(1.0), "food", "expense"), &vocabulary);
        assert_eq!(known.category_label, "Food");

        let unknown = normalize(&raw(json!(1.0), "vintage-cars", "expense"), &vocabulary);
        assert_eq!(unknown.category_label, "vintage-cars");

        let empty = normalize(&raw(json!(1.0), "", "expense"), &vocabulary);
        assert_eq!(empty.category_label, UNKNOWN_CATEGORY_LABEL);
    }

    #[test]
    fn amount_coercion_accepts_numbers_and_numeric_strings() {
        let vocabulary = CategoryVocabulary::builtin();

        let from_number = normalize(&raw(json!(42.15), "food", "expense"), &vocabulary);
        assert_eq!(from_number.amount, 42.15);

        let from_string = normalize(&raw(json!(" 42.15 "), "food", "expense"), &vocabulary);
        assert_eq!(from_string.amount, 42.15);

        let from_garbage = normalize(&raw(json!("forty-two"), "food", "expense"), &vocabulary);
        assert!(from_garbage.amount.is_nan());

        let from_null = normalize(&raw(serde_json::Value::Null, "food", "expense"), &vocabulary);
        assert!(from_null.amount.is_nan());
    }

    #[test]
    fn exclusion_flag_uses_truthiness_not_strict_typing() {
        let vocabulary = CategoryVocabulary::builtin();
        let truthy = [json!(true), json!(1), json!("yes"), json!([1])];
        let falsy = [
            json!(false),
            json!(0),
            json!(""),
            serde_json::Value::Null,
        ];

        for value in truthy {
            let mut record = raw(json!(1.0), "food", "expense");
            record.exclude_from_main = value.clone();
            assert!(
                normalize(&record, &vocabulary).exclude_from_main,
                "value: {value}"
            );
        }
        for value in falsy {
            let mut record = raw(json!(1.0), "food", "expense");
            record.exclude_from_main = value.clone();
            assert!(
                !normalize(&record, &vocabulary).exclude_from_main,
                "value: {value}"
            );
        }
    }

    #[test]
    fn normalize_round_trips_through_serialization() {
        let vocabulary = CategoryVocabulary::builtin();
        let record = raw(json!(100.0), "salary", "income");

        let first = normalize(&record, &vocabulary);
        let serialized = serde_json::to_string(&first);
        assert!(serialized.is_ok());
        if let Ok(payload) = serialized {
            let reparsed: Result<RawRecord, _> = serde_json::from_str(&payload);
            assert!(reparsed.is_ok());
            if let Ok(raw_again) = reparsed {
                let second = normalize(&raw_again, &vocabulary);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn serialized_field_names_match_the_persisted_payload_format() {
        let transaction = Transaction {
            id: "txn_1".to_string(),
            amount: 40.0,
            category: "food".to_string(),
            category_label: "Food".to_string(),
            kind: TransactionKind::Expense,
            date: "2024-01-20".to_string(),
            exclude_from_main: false,
        };

        let value = serde_json::to_value(&transaction);
        assert!(value.is_ok());
        if let Ok(json) = value {
            assert_eq!(json["type"], json!("expense"));
            assert_eq!(json["categoryLabel"], json!("Food"));
            assert_eq!(json["excludeFromMain"], json!(false));
        }
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let parsed: Result<RawRecord, _> = serde_json::from_str("{}");
        assert!(parsed.is_ok());
        if let Ok(record) = parsed {
            let vocabulary = CategoryVocabulary::builtin();
            let normalized = normalize(&record, &vocabulary);
            assert!(normalized.id.is_empty());
            assert!(normalized.amount.is_nan());
            assert_eq!(normalized.kind, TransactionKind::Expense);
            assert_eq!(normalized.category_label, UNKNOWN_CATEGORY_LABEL);
            assert!(!normalized.exclude_from_main);
        }
    }
}
