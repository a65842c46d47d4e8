mod cli;
mod dispatch;
mod output;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use spendlog_client::LedgerError;

const ROOT_HELP: &str = "Spendlog - local-first income and expense ledger

Usage:
  spendlog <command>

Start here:
  spendlog txn add --amount 42.15 --category food --kind expense
  spendlog txn list
  spendlog summary
";

const TOP_LEVEL_HELP: &str = "Spendlog — local-first income and expense ledger

USAGE: spendlog <command>

Record transactions:
  spendlog txn add --amount 42.15 --category food --kind expense
                                                          Record an expense dated today
  spendlog txn add --amount 2500 --category salary --kind income --date 2026-08-01
                                                          Record a dated income
  spendlog txn add --amount 300 --category other --kind expense --exclude
                                                          Record a transfer kept out of main totals

Review your ledger:
  spendlog txn list                                       List transactions, newest first
  spendlog txn list --category food --year 2026           Filter by category/year/month
  spendlog summary                                        Income, expense, and balance totals
  spendlog chart breakdown                                Expense totals per category
  spendlog chart monthly                                  Income/expense per month

Fix mistakes:
  spendlog txn edit <txn-id> --amount ... --category ... --kind ... --date ...
                                                          Replace a transaction's fields
  spendlog txn remove <txn-id>                            Delete a transaction

Other commands:
  spendlog category list                                  Show the category vocabulary

Every data command accepts --json for machine-readable output.
Run `spendlog <command> --help` for command usage.
";

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if output::write_stdout_line(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let body = if is_top_level_help_request(&raw_args) {
                    TOP_LEVEL_HELP.to_string()
                } else {
                    err.to_string()
                };
                if output::write_stdout_line(&body).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                LedgerError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the error contract's recovery steps are the single source of
/// guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["txn", "add", ..] => Some("txn add"),
        ["txn", "edit", ..] => Some("txn edit"),
        ["txn", "remove", ..] => Some("txn remove"),
        ["txn", "list", ..] => Some("txn list"),
        ["txn", ..] => Some("txn"),
        ["summary", ..] => Some("summary"),
        ["chart", "breakdown", ..] => Some("chart breakdown"),
        ["chart", "monthly", ..] => Some("chart monthly"),
        ["chart", ..] => Some("chart"),
        ["category", "list", ..] => Some("category list"),
        ["category", ..] => Some("category"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &LedgerError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn is_internal_error(error: &LedgerError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "ledger_init_permission_denied"
                | "ledger_locked"
                | "ledger_corrupt"
                | "migration_failed"
                | "ledger_init_failed"
        )
}
