//! CSV statement ingestion
//!
//! Statements arrive as CSV with a header row naming the fields: `amount` at
//! minimum, usually `date`, `balance`, and `description`, plus whatever else
//! the bank includes. Header matching is insensitive to casing and whitespace
//! because [`StatementRecord`] normalizes every field name.

use std::io::Read;

use crate::types::{AuditError, AuditResult, StatementRecord};

/// Read every row of a CSV statement into raw records.
///
/// The first row must be a header; each following row must have the same
/// number of fields. Ragged rows are an input error, not a partial record.
pub fn read_records<R: Read>(reader: R) -> AuditResult<Vec<StatementRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| AuditError::Reader { source })?
        .clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|source| AuditError::Reader { source })?;
        records.push(StatementRecord::from_fields(headers.iter().zip(row.iter())));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_into_normalized_records() {
        let csv = "Date,Description,Amount,Balance\n01/02/2023,coffee,(4.50),95.50\n";
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("amount"), Some("(4.50)"));
        assert_eq!(records[0].get("DATE"), Some("01/02/2023"));
        assert_eq!(records[0].get("description"), Some("coffee"));
    }

    #[test]
    fn keeps_pass_through_fields() {
        let csv = "Amount,Check Number\n10.00,1234\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].get("check number"), Some("1234"));
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let csv = "Amount,Balance\n\"$1,000.00\",\"1,100.00\"\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].get("amount"), Some("$1,000.00"));
        assert_eq!(records[0].get("balance"), Some("1,100.00"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "Amount,Balance\n10.00\n";
        assert!(matches!(
            read_records(csv.as_bytes()),
            Err(AuditError::Reader { .. })
        ));
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = read_records("".as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
