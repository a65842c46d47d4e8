use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::date::month_bucket;
use crate::ledger::transaction::Transaction;

// 47 is coprime with 360, so consecutive slice hues never repeat early.
const HUE_STEP: usize = 47;

/// Expense totals grouped by category label, with one deterministic color
/// per slice. Parallel vectors, ready for a pie-chart widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

/// Per-month income and expense sums keyed by `YYYY-MM`, sorted ascending.
/// Months without transactions are absent, not zero-filled: consumers must
/// treat missing periods as gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

/// Groups expense-kind transactions by label in first-appearance order.
/// Income never contributes; callers pass the main (non-excluded) subset.
pub fn build_category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut labels: Vec<String> = Vec::new();
    let mut data: Vec<f64> = Vec::new();

    for transaction in transactions {
        if transaction.kind.is_income() {
            continue;
        }
        match labels
            .iter()
            .position(|label| label == &transaction.category_label)
        {
            Some(index) => data[index] += transaction.amount,
            None => {
                labels.push(transaction.category_label.clone());
                data.push(transaction.amount);
            }
        }
    }

    let colors = (0..labels.len()).map(slice_color).collect();

    CategoryBreakdown {
        labels,
        data,
        colors,
    }
}

/// Buckets both kinds by `YYYY-MM`. Transactions whose date fails
/// structural extraction are silently skipped. Lexicographic bucket order
/// equals chronological order for well-formed dates.
pub fn build_monthly_series(transactions: &[Transaction]) -> MonthlySeries {
    let mut buckets: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let Some(bucket) = month_bucket(&transaction.date) else {
            continue;
        };
        let entry = buckets.entry(bucket).or_insert((0.0, 0.0));
        if transaction.kind.is_income() {
            entry.0 += transaction.amount;
        } else {
            entry.1 += transaction.amount;
        }
    }

    let mut series = MonthlySeries::default();
    for (label, (income, expense)) in buckets {
        series.labels.push(label);
        series.income.push(income);
        series.expense.push(expense);
    }
    series
}

fn slice_color(index: usize) -> String {
    format!("hsl({} 70% 50%)", (index * HUE_STEP) % 360)
}
