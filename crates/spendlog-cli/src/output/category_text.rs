use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_category_list(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("category list output requires rows"))?;

    let columns = [
        Column {
            name: "Value",
            align: Align::Left,
        },
        Column {
            name: "Label",
            align: Align::Left,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("value").and_then(Value::as_str).unwrap_or("").to_string(),
                row.get("label").and_then(Value::as_str).unwrap_or("").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![
        format!("{} categories, in option order:", rows.len()),
        String::new(),
    ];
    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}
