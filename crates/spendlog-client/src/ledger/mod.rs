pub mod charts;
pub mod date;
pub mod filter;
pub mod store;
pub mod summary;
pub mod transaction;

pub use charts::{CategoryBreakdown, MonthlySeries};
pub use filter::FilterState;
pub use store::{LedgerStore, LedgerView, TransactionInput};
pub use summary::Summary;
pub use transaction::{RawRecord, Transaction, TransactionKind};
