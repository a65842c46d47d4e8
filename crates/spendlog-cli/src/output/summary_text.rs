use std::io;

use serde_json::Value;

use super::format::{self, format_plain_amount};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let main = data
        .get("main")
        .ok_or_else(|| io::Error::other("summary output requires a main section"))?;
    let excluded = data
        .get("excluded")
        .ok_or_else(|| io::Error::other("summary output requires an excluded section"))?;

    let count = data
        .get("transaction_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut lines = vec![
        format!("Summary over {count} matching {}:", plural(count)),
        String::new(),
        "Main ledger:".to_string(),
    ];
    lines.extend(triple_rows(main));
    lines.push(String::new());
    lines.push("Excluded from main:".to_string());
    lines.extend(triple_rows(excluded));

    Ok(lines.join("\n"))
}

fn triple_rows(summary: &Value) -> Vec<String> {
    format::key_value_rows(
        &[
            ("Income:", amount_field(summary, "income")),
            ("Expense:", amount_field(summary, "expense")),
            ("Balance:", amount_field(summary, "balance")),
        ],
        2,
    )
}

fn amount_field(summary: &Value, key: &str) -> String {
    format_plain_amount(summary.get(key).and_then(Value::as_f64).unwrap_or(0.0))
}

fn plural(count: u64) -> &'static str {
    if count == 1 {
        "transaction"
    } else {
        "transactions"
    }
}
