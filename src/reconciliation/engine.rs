//! Balance validation over an ordered working set of transactions

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, RunSummary};
use crate::money::format_amount;
use crate::types::Transaction;

/// Engine that validates a statement's running balances.
///
/// The pipeline is strictly sequential: drop pending rows, order by date,
/// accumulate the net delta while checking continuity, reconcile the
/// endpoints, then tally. [`reconcile`](ReconciliationEngine::reconcile) runs
/// the whole pipeline; the individual steps are public for callers that need
/// finer control.
#[derive(Debug, Clone, Copy)]
pub struct ReconciliationEngine;

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Transactions that entered the checks after pending rows were removed.
    pub reviewed: usize,
    /// Pending transactions that were warned about and dropped.
    pub skipped_pending: usize,
    /// Signed sum of the reviewed amounts.
    pub net_delta: BigDecimal,
    /// Error and warning tally at the end of the run.
    pub summary: RunSummary,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over `transactions`.
    ///
    /// Emits diagnostics along the way and returns the machine-readable
    /// report. When nothing survives the pending filter the run stops after a
    /// single ERROR and no tally line is delivered to the sink.
    pub fn reconcile(
        &self,
        transactions: Vec<Transaction>,
        diagnostics: &mut Diagnostics,
    ) -> ReconciliationReport {
        let (mut kept, skipped_pending) = self.filter_pending(transactions, diagnostics);
        if kept.is_empty() {
            diagnostics.error("No transactions entered.");
            return ReconciliationReport {
                reviewed: 0,
                skipped_pending,
                net_delta: BigDecimal::from(0),
                summary: diagnostics.summary(),
            };
        }

        self.order(&mut kept);
        let net_delta = self.compute_delta(&kept, diagnostics);
        diagnostics.info(format!("Total change in balance should be {net_delta}."));
        self.reconcile_endpoints(&kept, &net_delta, diagnostics);
        let summary = diagnostics.summarize();

        ReconciliationReport {
            reviewed: kept.len(),
            skipped_pending,
            net_delta,
            summary,
        }
    }

    /// Drop pending transactions, warning about each one.
    ///
    /// Returns the kept transactions in their input order and the number
    /// removed.
    pub fn filter_pending(
        &self,
        transactions: Vec<Transaction>,
        diagnostics: &mut Diagnostics,
    ) -> (Vec<Transaction>, usize) {
        let mut kept = Vec::with_capacity(transactions.len());
        let mut skipped = 0;
        for transaction in transactions {
            if transaction.pending {
                diagnostics.warn(format!("Skipping pending transaction [{transaction}]."));
                skipped += 1;
            } else {
                kept.push(transaction);
            }
        }
        (kept, skipped)
    }

    /// Sort ascending by date.
    ///
    /// The sort is stable, so transactions on the same day keep their input
    /// order; that fixes which inconsistency gets reported when same-day rows
    /// disagree. Undated transactions order before dated ones.
    pub fn order(&self, transactions: &mut [Transaction]) {
        transactions.sort_by_key(|transaction| transaction.date);
    }

    /// Accumulate the net delta and check running-balance continuity.
    ///
    /// A transaction is checked only when the previous transaction recorded a
    /// non-zero balance. A zero previous balance is treated like a missing
    /// one, so the row after a zeroing transaction is never flagged.
    pub fn compute_delta(
        &self,
        transactions: &[Transaction],
        diagnostics: &mut Diagnostics,
    ) -> BigDecimal {
        let mut previous_balance: Option<BigDecimal> = None;
        let mut delta = BigDecimal::from(0);
        for transaction in transactions {
            delta += &transaction.amount;
            if let (Some(previous), Some(balance)) = (&previous_balance, &transaction.balance) {
                if *previous != BigDecimal::from(0) && previous + &transaction.amount != *balance {
                    diagnostics.error(format!(
                        "transaction [{transaction}] is NOT consistent with previous balance of {}.",
                        format_amount(previous)
                    ));
                }
            }
            previous_balance = transaction.balance.clone();
        }
        delta
    }

    /// Check the starting balance plus `delta` against the ending balance.
    ///
    /// The starting balance is derived from the first transaction (recorded
    /// balance minus amount); the ending balance is the last transaction's
    /// recorded balance. When either endpoint lacks a balance the check is
    /// skipped with a WARN.
    pub fn reconcile_endpoints(
        &self,
        transactions: &[Transaction],
        delta: &BigDecimal,
        diagnostics: &mut Diagnostics,
    ) {
        let endpoints = match (transactions.first(), transactions.last()) {
            (Some(first), Some(last)) => match (&first.balance, &last.balance) {
                (Some(first_balance), Some(ending)) => {
                    Some((first_balance - &first.amount, ending.clone()))
                }
                _ => None,
            },
            _ => None,
        };
        let Some((starting, ending)) = endpoints else {
            diagnostics.warn(
                "Unable to reconcile starting and ending balances \
                 (maybe the balance column was not provided?).",
            );
            return;
        };

        if &starting + delta == ending {
            diagnostics
                .good("Starting and ending balances are consistent with transaction history.");
        } else {
            diagnostics.error(format!(
                "Starting and ending balances are NOT consistent with transaction history: \
                 calculated balance change of {}, actual change of {}.",
                &ending - &starting,
                delta
            ));
        }
    }
}
