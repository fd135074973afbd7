//! # Statement Core
//!
//! A bank-statement auditing library: parse exported transactions with exact
//! decimal amounts, rebuild the expected running balance, and report every
//! inconsistency between the recorded balances and the transaction history.
//!
//! ## Features
//!
//! - **Exact money handling**: amounts are [`bigdecimal::BigDecimal`] values
//!   parsed from accounting notation ($ symbols, grouping commas,
//!   parenthesized negatives), never floats
//! - **Running-balance continuity**: each recorded balance is checked against
//!   the previous balance plus the transaction amount
//! - **Endpoint reconciliation**: the derived starting balance plus the net
//!   delta must match the final recorded balance
//! - **Pending awareness**: unsettled rows are warned about and excluded
//! - **Classified diagnostics**: INFO/WARN/ERROR/GOOD messages with per-run
//!   counts and a closing tally, routed through a pluggable sink
//! - **CSV ingestion**: header-driven row reading with normalized field names
//!
//! ## Quick Start
//!
//! ```rust
//! use statement_core::{audit_records, Diagnostics, StatementRecord};
//!
//! let records = vec![
//!     StatementRecord::from_fields([
//!         ("Date", "01/02/2023"),
//!         ("Description", "coffee"),
//!         ("Amount", "(4.50)"),
//!         ("Balance", "95.50"),
//!     ]),
//!     StatementRecord::from_fields([
//!         ("Date", "01/03/2023"),
//!         ("Description", "paycheck"),
//!         ("Amount", "$1,000.00"),
//!         ("Balance", "1,095.50"),
//!     ]),
//! ];
//!
//! let mut diagnostics = Diagnostics::new();
//! let report = audit_records(records, &mut diagnostics).unwrap();
//! assert_eq!(report.summary.errors, 0);
//! ```

pub mod diagnostics;
pub mod money;
pub mod reconciliation;
pub mod statement;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use diagnostics::*;
pub use money::*;
pub use reconciliation::*;
pub use statement::*;
pub use types::*;
