use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Header plus rows at natural column widths; cells never wrap.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let mut widths = columns
        .iter()
        .map(|column| column.name.len())
        .collect::<Vec<usize>>();
    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.len());
            }
        }
    }

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = vec![format_row(columns, &header, &widths)];
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&0);
        let value = cells.get(index).cloned().unwrap_or_default();

        let piece = match column.align {
            Align::Left => format!("{value:<width$}"),
            Align::Right => format!("{value:>width$}"),
        };
        pieces.push(piece);
    }

    let gap = " ".repeat(COLUMN_GAP);
    format!("{}{}", " ".repeat(INDENT), pieces.join(&gap))
}

/// `$1,234.50`, or `-$40.00` for negative balances.
pub fn format_plain_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let grouped = group_thousands(integer);
    if value < 0.0 {
        format!("-${grouped}.{fraction}")
    } else {
        format!("${grouped}.{fraction}")
    }
}

/// Per-transaction rendering: income is `+$100.00`, expense `-$40.00`.
pub fn format_signed_amount(value: f64, is_income: bool) -> String {
    let sign = if is_income { "+" } else { "-" };
    format!("{sign}{}", format_plain_amount(value))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
