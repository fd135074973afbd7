//! Core types and data structures for statement auditing

use std::collections::BTreeMap;
use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::money::{self, AmountError};

/// Textual date format used by statement exports (month first).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Description suffix that marks a transaction as not yet settled.
const PENDING_SUFFIX: &str = "(pending)";

/// One raw statement row: field name mapped to field text.
///
/// Field names are normalized (trimmed and lower-cased) on insertion, so
/// lookups are insensitive to header casing and stray whitespace. Values are
/// kept exactly as supplied. Iteration is sorted by name, which keeps the
/// rendered form of a record stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    fields: BTreeMap<String, String>,
}

impl StatementRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, text)` pairs, normalizing every name.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in fields {
            record.insert(key.as_ref(), value);
        }
        record
    }

    /// Insert one field under its normalized name.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(normalize_key(key), value.into());
    }

    /// Look up a field, insensitive to name casing and surrounding whitespace.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&normalize_key(key)).map(String::as_str)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, text)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

impl fmt::Display for StatementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            if value.is_empty() {
                write!(f, "{key}: None")?;
            } else {
                write!(f, "{key}: {value}")?;
            }
        }
        Ok(())
    }
}

/// One validated statement transaction.
///
/// Built from a [`StatementRecord`] and immutable afterwards. The raw fields
/// are retained in `info` so diagnostics can cite the row as it was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount; negative when the source text was parenthesized.
    pub amount: BigDecimal,
    /// Transaction date, when the row supplied one.
    pub date: Option<NaiveDate>,
    /// Recorded running balance, absent when the balance field was blank.
    pub balance: Option<BigDecimal>,
    /// The full original field mapping, names normalized.
    pub info: StatementRecord,
    /// True for rows that have not settled: a "(pending)" description suffix
    /// or no recorded balance.
    pub pending: bool,
}

impl Transaction {
    /// Build a transaction from one raw record.
    ///
    /// The amount is required; date and balance are optional but must parse
    /// when present. A blank balance counts as absent, a blank date does not.
    /// Each failure emits exactly one ERROR diagnostic before returning; a
    /// successful construction emits nothing.
    pub fn from_record(
        record: StatementRecord,
        diagnostics: &mut Diagnostics,
    ) -> AuditResult<Self> {
        let amount = match money::parse_amount(record.get("amount").unwrap_or_default()) {
            Ok(amount) => amount,
            Err(source) => {
                diagnostics.error(format!(
                    "Unable to parse transaction amount from entry [{record}]."
                ));
                return Err(AuditError::Amount { source });
            }
        };

        let date = match record.get("date") {
            Some(text) => match NaiveDate::parse_from_str(text, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(source) => {
                    diagnostics.error(format!(
                        "Unable to parse transaction date from entry [{record}]."
                    ));
                    return Err(AuditError::Date { source });
                }
            },
            None => None,
        };

        let balance = match record.get("balance") {
            Some(text) if !text.trim().is_empty() => match money::parse_amount(text) {
                Ok(balance) => Some(balance),
                Err(source) => {
                    diagnostics.error(format!(
                        "Unable to parse balance remaining from entry [{record}]."
                    ));
                    return Err(AuditError::Balance { source });
                }
            },
            _ => None,
        };

        let pending = record
            .get("description")
            .unwrap_or_default()
            .trim()
            .to_lowercase()
            .ends_with(PENDING_SUFFIX)
            || balance.is_none();

        Ok(Self {
            amount,
            date,
            balance,
            info: record,
            pending,
        })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pending {
            f.write_str("[Pending] ")?;
        }
        write!(f, "{}", self.info)
    }
}

/// Errors that abort a statement audit.
///
/// Parse failures carry their cause. Every construction failure has already
/// been reported through [`Diagnostics`] by the time it is returned.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Unable to parse transaction amount")]
    Amount {
        #[source]
        source: AmountError,
    },
    #[error("Unable to parse transaction date")]
    Date {
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unable to parse balance remaining")]
    Balance {
        #[source]
        source: AmountError,
    },
    #[error("Unable to read statement input")]
    Reader {
        #[source]
        source: csv::Error,
    },
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;
