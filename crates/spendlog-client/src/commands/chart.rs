use std::path::Path;

use crate::LedgerResult;
use crate::commands::common::{build_filter, filter_echo, open_ledger};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BreakdownData, MonthlySeriesData};

#[derive(Debug, Default)]
pub struct ChartRunOptions<'a> {
    pub category: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn breakdown(
    category: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
) -> LedgerResult<SuccessEnvelope> {
    breakdown_with_options(ChartRunOptions {
        category: category.map(std::string::ToString::to_string),
        year: year.map(std::string::ToString::to_string),
        month: month.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn breakdown_with_options(options: ChartRunOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let filters = build_filter(
        options.category.as_deref(),
        options.year.as_deref(),
        options.month.as_deref(),
        "chart breakdown",
    )?;
    let ledger = open_ledger(options.home_override)?;
    let view = ledger.derive_view(&filters);

    success(
        "chart breakdown",
        BreakdownData {
            filters: filter_echo(&filters),
            labels: view.category_breakdown.labels,
            data: view.category_breakdown.data,
            colors: view.category_breakdown.colors,
        },
    )
}

pub fn monthly(
    category: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
) -> LedgerResult<SuccessEnvelope> {
    monthly_with_options(ChartRunOptions {
        category: category.map(std::string::ToString::to_string),
        year: year.map(std::string::ToString::to_string),
        month: month.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn monthly_with_options(options: ChartRunOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let filters = build_filter(
        options.category.as_deref(),
        options.year.as_deref(),
        options.month.as_deref(),
        "chart monthly",
    )?;
    let ledger = open_ledger(options.home_override)?;
    let view = ledger.derive_view(&filters);

    success(
        "chart monthly",
        MonthlySeriesData {
            filters: filter_echo(&filters),
            labels: view.monthly_series.labels,
            income: view.monthly_series.income,
            expense: view.monthly_series.expense,
        },
    )
}
