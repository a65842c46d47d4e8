use std::path::Path;

use crate::LedgerResult;
use crate::commands::common::{build_filter, filter_echo, open_ledger};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;

#[derive(Debug, Default)]
pub struct SummaryRunOptions<'a> {
    pub category: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(
    category: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
) -> LedgerResult<SuccessEnvelope> {
    run_with_options(SummaryRunOptions {
        category: category.map(std::string::ToString::to_string),
        year: year.map(std::string::ToString::to_string),
        month: month.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryRunOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let filters = build_filter(
        options.category.as_deref(),
        options.year.as_deref(),
        options.month.as_deref(),
        "summary",
    )?;
    let ledger = open_ledger(options.home_override)?;
    let view = ledger.derive_view(&filters);

    success(
        "summary",
        SummaryData {
            filters: filter_echo(&filters),
            transaction_count: view.transactions.len(),
            main: view.main_summary,
            excluded: view.excluded_summary,
        },
    )
}
