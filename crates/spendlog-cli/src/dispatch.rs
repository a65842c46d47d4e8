use chrono::Local;
use spendlog_client::commands;
use spendlog_client::ledger::store::TransactionInput;
use spendlog_client::{LedgerResult, SuccessEnvelope};

use crate::cli::{CategoryCommand, ChartCommand, Cli, Commands, FilterArgs, IsoDate, TxnCommand};

pub fn dispatch(cli: &Cli) -> LedgerResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Txn { command } => match command {
            TxnCommand::Add {
                amount,
                category,
                kind,
                date,
                exclude,
                json: _,
            } => commands::txn::add(transaction_input(
                *amount,
                category,
                kind,
                date.as_ref(),
                *exclude,
            )),
            TxnCommand::Edit {
                txn_id,
                amount,
                category,
                kind,
                date,
                exclude,
                json: _,
            } => commands::txn::edit(
                txn_id,
                transaction_input(*amount, category, kind, Some(date), *exclude),
            ),
            TxnCommand::Remove { txn_id, .. } => commands::txn::remove(txn_id),
            TxnCommand::List { filters, .. } => {
                let (category, year, month) = filter_values(filters);
                commands::txn::list(category, year, month)
            }
        },
        Commands::Summary { filters, .. } => {
            let (category, year, month) = filter_values(filters);
            commands::summary::run(category, year, month)
        }
        Commands::Chart { command } => match command {
            ChartCommand::Breakdown { filters, .. } => {
                let (category, year, month) = filter_values(filters);
                commands::chart::breakdown(category, year, month)
            }
            ChartCommand::Monthly { filters, .. } => {
                let (category, year, month) = filter_values(filters);
                commands::chart::monthly(category, year, month)
            }
        },
        Commands::Category { command } => match command {
            CategoryCommand::List { .. } => commands::category::list(),
        },
    }
}

fn transaction_input(
    amount: f64,
    category: &str,
    kind: &str,
    date: Option<&IsoDate>,
    exclude: bool,
) -> TransactionInput {
    let date_value = match date {
        Some(value) => value.as_str().to_string(),
        None => today_iso(),
    };
    TransactionInput {
        amount,
        category: category.to_string(),
        kind: kind.to_string(),
        date: date_value,
        exclude_from_main: exclude,
    }
}

fn filter_values(filters: &FilterArgs) -> (Option<&str>, Option<&str>, Option<&str>) {
    (
        filters.category.as_deref(),
        filters.year.as_deref(),
        filters.month.as_deref(),
    )
}

fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
