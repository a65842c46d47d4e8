use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_kind(value: &str) -> Result<String, String> {
    match value {
        "income" | "expense" => Ok(value.to_string()),
        _ => Err("kind must be `income` or `expense`".to_string()),
    }
}

pub fn parse_year(value: &str) -> Result<String, String> {
    if value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Ok(value.to_string());
    }
    Err("year must use YYYY format".to_string())
}

pub fn parse_month(value: &str) -> Result<String, String> {
    let well_formed = value.len() == 2
        && value.bytes().all(|byte| byte.is_ascii_digit())
        && value
            .parse::<u8>()
            .is_ok_and(|month| (1..=12).contains(&month));
    if well_formed {
        return Ok(value.to_string());
    }
    Err("month must be a two-digit value between 01 and 12".to_string())
}

#[derive(Debug, Parser)]
#[command(
    name = "spendlog",
    version,
    about = "local-first income and expense ledger",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Only include transactions in this category
    #[arg(long)]
    pub category: Option<String>,
    /// Only include transactions from this year (YYYY)
    #[arg(long, value_parser = parse_year)]
    pub year: Option<String>,
    /// Only include transactions from this month of the year (MM)
    #[arg(long, value_parser = parse_month)]
    pub month: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record, edit, remove, and list ledger transactions
    #[command(arg_required_else_help = true)]
    Txn {
        #[command(subcommand)]
        command: TxnCommand,
    },
    /// Show income/expense/balance totals, split by the exclusion flag
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Emit chart-ready datasets derived from the ledger
    #[command(arg_required_else_help = true)]
    Chart {
        #[command(subcommand)]
        command: ChartCommand,
    },
    /// Inspect the category vocabulary
    #[command(arg_required_else_help = true)]
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TxnCommand {
    /// Record a new transaction at the front of the ledger
    Add {
        /// Transaction amount (non-negative)
        #[arg(long)]
        amount: f64,
        /// Category value (see `spendlog category list`)
        #[arg(long)]
        category: String,
        /// `income` or `expense`
        #[arg(long, value_parser = parse_kind)]
        kind: String,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Keep this transaction out of the main totals and charts
        #[arg(long)]
        exclude: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of an existing transaction, keeping its id
    Edit {
        /// The transaction id to edit (e.g. txn_01ABC...)
        txn_id: String,
        /// Transaction amount (non-negative)
        #[arg(long)]
        amount: f64,
        /// Category value (see `spendlog category list`)
        #[arg(long)]
        category: String,
        /// `income` or `expense`
        #[arg(long, value_parser = parse_kind)]
        kind: String,
        /// Transaction date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        date: IsoDate,
        /// Keep this transaction out of the main totals and charts
        #[arg(long)]
        exclude: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove a transaction from the ledger
    Remove {
        /// The transaction id to remove (e.g. txn_01ABC...)
        txn_id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List transactions matching the current filters, newest first
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChartCommand {
    /// Expense totals grouped by category label, with slice colors
    Breakdown {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Per-month income and expense sums, sorted ascending
    Monthly {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List the category vocabulary in option order
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{CategoryCommand, Commands, TxnCommand, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 16] = [
            vec![
                "spendlog", "txn", "add", "--amount", "42.15", "--category", "food", "--kind",
                "expense",
            ],
            vec![
                "spendlog", "txn", "add", "--amount", "100", "--category", "salary", "--kind",
                "income", "--date", "2026-01-15", "--json",
            ],
            vec![
                "spendlog", "txn", "add", "--amount", "10", "--category", "other", "--kind",
                "expense", "--exclude",
            ],
            vec![
                "spendlog", "txn", "edit", "txn_1", "--amount", "5", "--category", "food",
                "--kind", "expense", "--date", "2026-01-15",
            ],
            vec!["spendlog", "txn", "remove", "txn_1"],
            vec!["spendlog", "txn", "remove", "txn_1", "--json"],
            vec!["spendlog", "txn", "list"],
            vec!["spendlog", "txn", "list", "--category", "food", "--json"],
            vec!["spendlog", "txn", "list", "--year", "2026", "--month", "03"],
            vec!["spendlog", "summary"],
            vec!["spendlog", "summary", "--year", "2026", "--json"],
            vec!["spendlog", "chart", "breakdown"],
            vec!["spendlog", "chart", "breakdown", "--category", "food"],
            vec!["spendlog", "chart", "monthly", "--json"],
            vec!["spendlog", "category", "list"],
            vec!["spendlog", "category", "list", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = parse_from([
            "spendlog", "txn", "add", "--amount", "1", "--category", "food", "--kind", "expense",
            "--date", "2026-99-01",
        ]);
        assert!(parsed.is_err());

        let impossible = parse_from([
            "spendlog", "txn", "add", "--amount", "1", "--category", "food", "--kind", "expense",
            "--date", "2026-02-31",
        ]);
        assert!(impossible.is_err());
    }

    #[test]
    fn invalid_kind_is_rejected() {
        let parsed = parse_from([
            "spendlog", "txn", "add", "--amount", "1", "--category", "food", "--kind", "transfer",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn invalid_filter_values_are_rejected() {
        let year = parse_from(["spendlog", "txn", "list", "--year", "26"]);
        assert!(year.is_err());

        let month = parse_from(["spendlog", "txn", "list", "--month", "13"]);
        assert!(month.is_err());

        let month_shape = parse_from(["spendlog", "summary", "--month", "3"]);
        assert!(month_shape.is_err());
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let parsed = parse_from([
            "spendlog", "txn", "add", "--amount", "ten", "--category", "food", "--kind", "expense",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn edit_requires_a_full_replacement() {
        let missing_date = parse_from([
            "spendlog", "txn", "edit", "txn_1", "--amount", "1", "--category", "food", "--kind",
            "expense",
        ]);
        assert!(missing_date.is_err());
    }

    #[test]
    fn parse_txn_add_flags() {
        let parsed = parse_from([
            "spendlog", "txn", "add", "--amount", "9.99", "--category", "shopping", "--kind",
            "expense", "--exclude", "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Txn {
                    command: TxnCommand::Add {
                        exclude: true,
                        json: true,
                        date: None,
                        ..
                    },
                }
            ));
        }
    }

    #[test]
    fn parse_category_list_subcommand() {
        let parsed = parse_from(["spendlog", "category", "list", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Category {
                    command: CategoryCommand::List { json: true }
                }
            ));
        }
    }

    #[test]
    fn bare_txn_shows_help() {
        let parsed = parse_from(["spendlog", "txn"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(
                err.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }

    #[test]
    fn bare_chart_shows_help() {
        let parsed = parse_from(["spendlog", "chart"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(
                err.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["spendlog", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["spendlog", "txn", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
