mod category_text;
mod chart_text;
mod error_text;
mod format;
mod json;
mod mode;
mod summary_text;
mod txn_text;

use std::io::{self, Write};

use spendlog_client::{LedgerError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &LedgerError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "txn add" => txn_text::render_txn_add(&success.data),
        "txn edit" => txn_text::render_txn_edit(&success.data),
        "txn remove" => txn_text::render_txn_remove(&success.data),
        "txn list" => txn_text::render_txn_list(&success.data),
        "summary" => summary_text::render_summary(&success.data),
        "chart breakdown" => chart_text::render_breakdown(&success.data),
        "chart monthly" => chart_text::render_monthly(&success.data),
        "category list" => category_text::render_category_list(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

/// Writes one line to stdout, swallowing broken-pipe errors so piping into
/// `head` and friends exits cleanly.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for chunk in [text.as_bytes(), b"\n"] {
        match stdout.write_all(chunk) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(error) => return Err(error),
        }
    }
    match stdout.flush() {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(error) => Err(error),
    }
}
