//! Precision-safe decimal types for market data.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, so provider payloads
//! such as `"65000.12340000"` are carried without floating-point drift up
//! to the rendering step. Rendering alone rounds like a binary float.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places used for every rendered price and percentage.
pub const DISPLAY_DP: u32 = 2;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to keep prices apart from percentages and index
/// levels in function signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// Render as US-dollar currency: `$65,000.12`.
    ///
    /// Always two decimals with comma thousands separators. A negative
    /// value keeps the sign after the currency symbol (`$-1,234.50`).
    pub fn to_usd(&self) -> String {
        format!("${}", format_grouped(self.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

/// Round to [`DISPLAY_DP`] places as the nearest `f64` would print.
///
/// The midpoint test runs on the binary value: `2.675` is stored just
/// below the midpoint and gives `2.67`, while exact ties such as `2.125`
/// go to the even digit (`2.12`).
pub fn round_display(value: Decimal) -> Decimal {
    let binary = value
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(value);
    binary.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Plain fixed-point rendering with two decimals: `22.7` -> `22.70`.
///
/// Negative inputs keep their sign even when they round to zero
/// (`-0.001` -> `-0.00`).
pub fn format_fixed(value: Decimal) -> String {
    let magnitude = round_display(value.abs());
    if value.is_sign_negative() {
        format!("-{magnitude:.2}")
    } else {
        format!("{magnitude:.2}")
    }
}

/// Fixed-point rendering with two decimals and comma thousands separators.
pub fn format_grouped(value: Decimal) -> String {
    let fixed = format_fixed(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d as char);
    }

    format!("{sign}{grouped}.{frac_part}")
}
