//! Parsing monetary text into exact decimals
//!
//! Bank exports decorate amounts with currency symbols, grouping commas, and
//! accounting-style parentheses for debits. The parser strips the decoration
//! and keeps the numeric value exact; no floating point is involved at any
//! step.

use bigdecimal::{BigDecimal, ParseBigDecimalError};

/// Characters removed from amount text before decimal conversion.
const STRIP_CHARS: [char; 2] = ['$', ','];

/// Upper bound on fractional digits for a parsed amount.
///
/// Statement amounts carry cents, occasionally a few extra digits from
/// currency conversion. Anything beyond eight fractional digits means the
/// field was mangled, not that the bank tracks sub-nano-dollars.
pub const MAX_FRACTIONAL_DIGITS: i64 = 8;

/// Errors produced while parsing monetary text.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    /// The text is not a decimal number once currency decorations are removed.
    #[error("'{text}' is not a monetary amount")]
    Invalid {
        text: String,
        #[source]
        source: ParseBigDecimalError,
    },
    /// The value carries more fractional digits than any real amount would.
    #[error("'{text}' has {digits} fractional digits (limit {limit})", limit = MAX_FRACTIONAL_DIGITS)]
    PrecisionExceeded { text: String, digits: i64 },
}

/// Parse a monetary value from statement text into an exact decimal.
///
/// Accepts the conventions found in bank exports: surrounding whitespace, a
/// `$` symbol, `,` grouping separators, and parenthesization for negative
/// values. The fractional digits of the input are preserved exactly; nothing
/// is rounded.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use statement_core::money::parse_amount;
///
/// let credit = parse_amount("$1,234.56").unwrap();
/// assert_eq!(credit, "1234.56".parse::<BigDecimal>().unwrap());
///
/// let debit = parse_amount("(4.50)").unwrap();
/// assert_eq!(debit, "-4.50".parse::<BigDecimal>().unwrap());
/// ```
pub fn parse_amount(text: &str) -> Result<BigDecimal, AmountError> {
    let trimmed = text.trim();
    let negative = trimmed.starts_with('(') && trimmed.ends_with(')');
    let unwrapped = if negative {
        trimmed.trim_matches(|c| c == '(' || c == ')')
    } else {
        trimmed
    };

    let cleaned: String = unwrapped
        .chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect();
    let magnitude: BigDecimal = cleaned.parse().map_err(|source| AmountError::Invalid {
        text: trimmed.to_string(),
        source,
    })?;
    let amount = if negative { -magnitude } else { magnitude };

    let digits = amount.fractional_digit_count();
    if digits > MAX_FRACTIONAL_DIGITS {
        return Err(AmountError::PrecisionExceeded {
            text: trimmed.to_string(),
            digits,
        });
    }
    Ok(amount)
}
