//! Accounting-style money rendering
//!
//! [`MoneyFormat`] renders an exact decimal with a fixed number of places,
//! grouping separators, an optional currency symbol, and configurable sign
//! markers, so the same value can come out as `-$1,234,567.89`,
//! `($1,234,567.89)`, or `1.234.568-` depending on the house style.

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

/// Options for the accounting-style money renderer.
///
/// Build one with the chained setters, then call
/// [`format`](MoneyFormat::format) as often as needed. The default renders
/// plain fixed-point text with two places, `,` grouping, and a leading `-`
/// for negatives.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use statement_core::money::MoneyFormat;
///
/// let value: BigDecimal = "-1234567.8901".parse().unwrap();
///
/// assert_eq!(
///     MoneyFormat::new().curr("$").format(&value),
///     "-$1,234,567.89"
/// );
/// assert_eq!(
///     MoneyFormat::new().curr("$").neg("(").trailneg(")").format(&value),
///     "($1,234,567.89)"
/// );
/// assert_eq!(
///     MoneyFormat::new().places(0).sep(".").dp("").neg("").trailneg("-").format(&value),
///     "1.234.568-"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Digits rendered after the decimal point.
    pub places: u32,
    /// Currency symbol placed between the sign and the digits.
    pub curr: String,
    /// Grouping separator inserted every three integer digits.
    pub sep: String,
    /// Decimal point text; leave empty only when `places` is zero.
    pub dp: String,
    /// Marker prefixed to non-negative values.
    pub pos: String,
    /// Marker prefixed to negative values.
    pub neg: String,
    /// Marker appended to negative values.
    pub trailneg: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            places: 2,
            curr: String::new(),
            sep: ",".to_string(),
            dp: ".".to_string(),
            pos: String::new(),
            neg: "-".to_string(),
            trailneg: String::new(),
        }
    }
}

impl MoneyFormat {
    /// Create the default format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of digits after the decimal point.
    pub fn places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    /// Set the currency symbol.
    pub fn curr(mut self, curr: impl Into<String>) -> Self {
        self.curr = curr.into();
        self
    }

    /// Set the grouping separator.
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Set the decimal point text.
    pub fn dp(mut self, dp: impl Into<String>) -> Self {
        self.dp = dp.into();
        self
    }

    /// Set the marker prefixed to non-negative values.
    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    /// Set the marker prefixed to negative values.
    pub fn neg(mut self, neg: impl Into<String>) -> Self {
        self.neg = neg.into();
        self
    }

    /// Set the marker appended to negative values.
    pub fn trailneg(mut self, trailneg: impl Into<String>) -> Self {
        self.trailneg = trailneg.into();
        self
    }

    /// Render `value` under these options.
    ///
    /// Values with more fractional digits than `places` are rounded half to
    /// even, the conventional rounding for monetary display. The fraction is
    /// zero-padded to exactly `places` digits and the integer part is grouped
    /// from the right in threes.
    pub fn format(&self, value: &BigDecimal) -> String {
        let rounded = value.with_scale_round(i64::from(self.places), RoundingMode::HalfEven);
        let negative = rounded < BigDecimal::from(0);
        let (unscaled, _) = rounded.abs().as_bigint_and_exponent();
        let digits = unscaled.to_string();

        let places = self.places as usize;
        let (int_digits, frac_digits) = if places == 0 {
            (digits.as_str(), "")
        } else if digits.len() > places {
            digits.split_at(digits.len() - places)
        } else {
            ("", digits.as_str())
        };

        let mut out = String::new();
        out.push_str(if negative { &self.neg } else { &self.pos });
        out.push_str(&self.curr);
        if int_digits.is_empty() {
            out.push('0');
        } else {
            let count = int_digits.len();
            for (i, digit) in int_digits.chars().enumerate() {
                if i > 0 && (count - i) % 3 == 0 {
                    out.push_str(&self.sep);
                }
                out.push(digit);
            }
        }
        out.push_str(&self.dp);
        for _ in frac_digits.len()..places {
            out.push('0');
        }
        out.push_str(frac_digits);
        if negative {
            out.push_str(&self.trailneg);
        }
        out
    }
}

/// Render an amount for diagnostics.
///
/// Plain fixed-point text with at least two decimal places, no grouping, and
/// the value's own precision preserved. Nothing is ever rounded away: a value
/// with five fractional digits renders with all five.
pub fn format_amount(value: &BigDecimal) -> String {
    let places = value.fractional_digit_count().max(2) as u32;
    MoneyFormat::new().places(places).sep("").format(value)
}
