use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_txn_add(data: &Value) -> io::Result<String> {
    let row = data
        .get("row")
        .ok_or_else(|| io::Error::other("txn add output requires a row"))?;

    let mut lines = vec![
        format!(
            "Recorded {} of {} in {}.",
            kind_of(row),
            amount_of(row),
            label_of(row)
        ),
        String::new(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Id:", text_field(row, "txn_id")),
            ("Date:", text_field(row, "date")),
            ("Excluded:", yes_no(row.get("excluded"))),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

pub fn render_txn_edit(data: &Value) -> io::Result<String> {
    let txn_id = data.get("txn_id").and_then(Value::as_str).unwrap_or("unknown");
    let updated = data.get("updated").and_then(Value::as_bool).unwrap_or(false);

    if !updated {
        return Ok(format!(
            "No transaction with id `{txn_id}`; nothing changed."
        ));
    }

    let Some(row) = data.get("row") else {
        return Ok(format!("Updated transaction `{txn_id}`."));
    };

    let mut lines = vec![format!("Updated transaction `{txn_id}`."), String::new()];
    lines.extend(format::key_value_rows(
        &[
            ("Amount:", format_row_amount(row)),
            ("Category:", label_of(row)),
            ("Date:", text_field(row, "date")),
            ("Excluded:", yes_no(row.get("excluded"))),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

pub fn render_txn_remove(data: &Value) -> io::Result<String> {
    let txn_id = data.get("txn_id").and_then(Value::as_str).unwrap_or("unknown");
    let removed = data.get("removed").and_then(Value::as_bool).unwrap_or(false);

    if removed {
        Ok(format!("Removed transaction `{txn_id}`."))
    } else {
        Ok(format!(
            "No transaction with id `{txn_id}`; nothing changed."
        ))
    }
}

pub fn render_txn_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("txn list output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No transactions match the current filters.",
            "",
            "Record your first one with `spendlog txn add`.",
        ]
        .join("\n"));
    }

    let mut lines = vec![list_heading(rows.len(), data), String::new()];

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Excluded",
            align: Align::Left,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text_field(row, "date"),
                label_of(row),
                format_row_amount(row),
                yes_no(row.get("excluded")),
                text_field(row, "txn_id"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

fn list_heading(count: usize, data: &Value) -> String {
    let noun = if count == 1 {
        "transaction"
    } else {
        "transactions"
    };
    let mut parts: Vec<String> = Vec::new();
    if let Some(filters) = data.get("filters") {
        if let Some(category) = filters.get("category").and_then(Value::as_str)
            && category != "all"
        {
            parts.push(format!("category {category}"));
        }
        if let Some(year) = filters.get("year").and_then(Value::as_str) {
            parts.push(format!("year {year}"));
        }
        if let Some(month) = filters.get("month").and_then(Value::as_str) {
            parts.push(format!("month {month}"));
        }
    }

    if parts.is_empty() {
        format!("{count} {noun}, newest first:")
    } else {
        format!("{count} {noun} ({}), newest first:", parts.join(", "))
    }
}

fn format_row_amount(row: &Value) -> String {
    let amount = row.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
    let is_income = row.get("kind").and_then(Value::as_str) == Some("income");
    format::format_signed_amount(amount, is_income)
}

fn kind_of(row: &Value) -> String {
    text_field(row, "kind")
}

fn label_of(row: &Value) -> String {
    text_field(row, "category_label")
}

fn amount_of(row: &Value) -> String {
    format::format_plain_amount(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0))
}

fn text_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn yes_no(value: Option<&Value>) -> String {
    if value.and_then(Value::as_bool).unwrap_or(false) {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_txn_edit, render_txn_list, render_txn_remove};

    #[test]
    fn empty_list_prints_the_getting_started_hint() {
        let data = json!({
            "filters": {"category": "all", "year": null, "month": null},
            "total": 0,
            "years": [],
            "rows": []
        });
        let rendered = render_txn_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("No transactions match"));
            assert!(text.contains("spendlog txn add"));
        }
    }

    #[test]
    fn list_heading_names_active_filters() {
        let data = json!({
            "filters": {"category": "food", "year": "2024", "month": null},
            "total": 1,
            "years": ["2024"],
            "rows": [{
                "txn_id": "txn_1",
                "amount": 40.0,
                "category": "food",
                "category_label": "Food",
                "kind": "expense",
                "date": "2024-01-20",
                "excluded": false
            }]
        });
        let rendered = render_txn_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("1 transaction (category food, year 2024)"));
            assert!(text.contains("-$40.00"));
            assert!(text.contains("txn_1"));
        }
    }

    #[test]
    fn missing_edit_target_renders_a_noop_message() {
        let data = json!({"txn_id": "txn_gone", "updated": false});
        let rendered = render_txn_edit(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("txn_gone"));
            assert!(text.contains("nothing changed"));
        }
    }

    #[test]
    fn remove_reports_both_outcomes() {
        let removed = render_txn_remove(&json!({"txn_id": "txn_1", "removed": true}));
        assert!(removed.is_ok());
        if let Ok(text) = removed {
            assert!(text.starts_with("Removed transaction"));
        }

        let missed = render_txn_remove(&json!({"txn_id": "txn_1", "removed": false}));
        assert!(missed.is_ok());
        if let Ok(text) = missed {
            assert!(text.contains("nothing changed"));
        }
    }
}
