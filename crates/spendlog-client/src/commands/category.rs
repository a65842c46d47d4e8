use crate::LedgerResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoryListData, CategoryRow};
use crate::vocabulary::CategoryVocabulary;

/// Lists the category vocabulary in option order. Reads no ledger state.
pub fn list() -> LedgerResult<SuccessEnvelope> {
    let vocabulary = CategoryVocabulary::builtin();
    let rows = vocabulary
        .categories()
        .iter()
        .map(|category| CategoryRow {
            value: category.value.clone(),
            label: category.label.clone(),
        })
        .collect::<Vec<CategoryRow>>();

    success("category list", CategoryListData { rows })
}
