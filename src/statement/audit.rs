//! End-to-end statement auditing

use std::io::Read;

use crate::diagnostics::Diagnostics;
use crate::reconciliation::{ReconciliationEngine, ReconciliationReport};
use crate::statement::reader::read_records;
use crate::types::{AuditResult, StatementRecord, Transaction};

/// Audit a batch of raw statement records.
///
/// Builds every transaction first, so a construction failure aborts the whole
/// batch and a partially parsed statement is never reconciled. On success the
/// full reconciliation pipeline runs over the batch.
pub fn audit_records(
    records: Vec<StatementRecord>,
    diagnostics: &mut Diagnostics,
) -> AuditResult<ReconciliationReport> {
    let mut transactions = Vec::with_capacity(records.len());
    for record in records {
        transactions.push(Transaction::from_record(record, diagnostics)?);
    }
    Ok(ReconciliationEngine::new().reconcile(transactions, diagnostics))
}

/// Read a CSV statement and audit it.
pub fn audit_reader<R: Read>(
    reader: R,
    diagnostics: &mut Diagnostics,
) -> AuditResult<ReconciliationReport> {
    let records = read_records(reader)?;
    audit_records(records, diagnostics)
}
