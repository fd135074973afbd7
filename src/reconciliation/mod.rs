//! Reconciliation engine for bank statements
//!
//! Orders validated transactions by date, accumulates the net change in
//! balance, verifies running-balance continuity, and reconciles the
//! statement's endpoints against its transaction history.

pub mod engine;

pub use engine::*;
