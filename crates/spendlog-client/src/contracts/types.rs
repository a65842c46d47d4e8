use serde::Serialize;

use crate::ledger::summary::Summary;

#[derive(Debug, Clone, Serialize)]
pub struct TxnRow {
    pub txn_id: String,
    pub amount: f64,
    pub category: String,
    pub category_label: String,
    pub kind: String,
    pub date: String,
    pub excluded: bool,
}

/// Echo of the applied filter state; `None` means wildcard.
#[derive(Debug, Clone, Serialize)]
pub struct FilterEcho {
    pub category: String,
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnAddData {
    pub row: TxnRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnEditData {
    pub txn_id: String,
    pub updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<TxnRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnRemoveData {
    pub txn_id: String,
    pub removed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnListData {
    pub filters: FilterEcho,
    pub total: usize,
    pub years: Vec<String>,
    pub rows: Vec<TxnRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub filters: FilterEcho,
    pub transaction_count: usize,
    pub main: Summary,
    pub excluded: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownData {
    pub filters: FilterEcho,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySeriesData {
    pub filters: FilterEcho,
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListData {
    pub rows: Vec<CategoryRow>,
}
