//! Budget categories with plain-text ledgers and a percentage spend chart.

pub mod chart;
pub mod error;
pub mod import;
pub mod models;
pub mod run;
mod util;

pub use chart::{create_spend_chart, format_names};
pub use error::{BookError, ChartError};
pub use import::{Operation, Replay, Script};
pub use models::{Book, Category, LedgerEntry};
