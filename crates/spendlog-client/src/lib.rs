pub mod commands;
pub mod contracts;
pub mod error;
pub mod ledger;
pub mod migrations;
pub mod setup;
pub mod state;
pub mod storage;
pub mod vocabulary;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{LedgerError, LedgerResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
