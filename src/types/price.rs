//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Prices are stored as `u64` scaled by 10^8, giving 8 decimal places
//! without floating-point error. Only the boundary (driver input, logging)
//! converts between decimal strings and fixed-point; the matching scan
//! compares raw `u64` values directly.
//!
//! ## Examples
//!
//! ```
//! use tickmatch::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("100.25").unwrap();
//! assert_eq!(price, 10_025_000_000);
//! assert_eq!(from_fixed(price), "100.25000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^8
///
/// This provides 8 decimal places of precision.
pub const SCALE: u64 = 100_000_000;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64.
///
/// Returns `None` if parsing fails or the value is negative or out of range.
///
/// # Example
///
/// ```
/// use tickmatch::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-1.0"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` to fixed-point u64.
///
/// Returns `None` if the value is negative or out of range.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert fixed-point u64 to a `Decimal`.
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places.
///
/// # Example
///
/// ```
/// use tickmatch::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(10_025_000_000), "100.25000000");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Convert fixed-point u64 to a human-readable string with trailing zeros
/// trimmed.
///
/// # Example
///
/// ```
/// use tickmatch::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    format!("{}", fixed_to_decimal(value).normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================
