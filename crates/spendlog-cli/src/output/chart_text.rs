use std::io;

use serde_json::Value;

use super::format::{self, Align, Column, format_plain_amount};

pub fn render_breakdown(data: &Value) -> io::Result<String> {
    let labels = string_array(data, "labels")?;
    let amounts = number_array(data, "data")?;
    let colors = string_array(data, "colors")?;

    if labels.is_empty() {
        return Ok("No expense data for the current filters.".to_string());
    }

    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Color",
            align: Align::Left,
        },
    ];

    let rows = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            vec![
                label.clone(),
                format_plain_amount(amounts.get(index).copied().unwrap_or(0.0)),
                colors.get(index).cloned().unwrap_or_default(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec!["Expense breakdown by category:".to_string(), String::new()];
    lines.extend(format::render_table(&columns, &rows));
    Ok(lines.join("\n"))
}

pub fn render_monthly(data: &Value) -> io::Result<String> {
    let labels = string_array(data, "labels")?;
    let income = number_array(data, "income")?;
    let expense = number_array(data, "expense")?;

    if labels.is_empty() {
        return Ok("No dated transactions for the current filters.".to_string());
    }

    let columns = [
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "Income",
            align: Align::Right,
        },
        Column {
            name: "Expense",
            align: Align::Right,
        },
    ];

    let rows = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            vec![
                label.clone(),
                format_plain_amount(income.get(index).copied().unwrap_or(0.0)),
                format_plain_amount(expense.get(index).copied().unwrap_or(0.0)),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![
        "Monthly income and expense totals (months with no data are omitted):".to_string(),
        String::new(),
    ];
    lines.extend(format::render_table(&columns, &rows));
    Ok(lines.join("\n"))
}

fn string_array(data: &Value, key: &str) -> io::Result<Vec<String>> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .map(|value| value.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .ok_or_else(|| io::Error::other(format!("chart output requires `{key}`")))
}

fn number_array(data: &Value, key: &str) -> io::Result<Vec<f64>> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .map(|value| value.as_f64().unwrap_or(0.0))
                .collect()
        })
        .ok_or_else(|| io::Error::other(format!("chart output requires `{key}`")))
}
