use crate::cli::{CategoryCommand, ChartCommand, Commands, TxnCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

fn from_flag(json: bool) -> OutputMode {
    if json { OutputMode::Json } else { OutputMode::Text }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Txn { command } => match command {
            TxnCommand::Add { json, .. }
            | TxnCommand::Edit { json, .. }
            | TxnCommand::Remove { json, .. }
            | TxnCommand::List { json, .. } => from_flag(*json),
        },
        Commands::Summary { json, .. } => from_flag(*json),
        Commands::Chart { command } => match command {
            ChartCommand::Breakdown { json, .. } | ChartCommand::Monthly { json, .. } => {
                from_flag(*json)
            }
        },
        Commands::Category { command } => match command {
            CategoryCommand::List { json } => from_flag(*json),
        },
    }
}
