//! # Money Module
//!
//! Provides the `Money` type for item prices and the `Percentage` type for
//! service charge and tax.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED VALUES: Integer satang                                          │
//! │    Item prices have at most 2 decimal places, so they fit exactly in   │
//! │    an i64 count of satang (1/100 baht).                                │
//! │      ฿12.99 → Money(1299)                                               │
//! │                                                                         │
//! │  DERIVED VALUES: Exact decimals                                         │
//! │    Splitting a price between people does NOT stay on whole satang:     │
//! │      ฿100.00 / 3 = 33.333333333333333333333333333                       │
//! │    Shares, charges and totals are rust_decimal::Decimal so summing     │
//! │    them back up never drifts. Rounding to 2 places happens only when   │
//! │    an amount is displayed (`format_amount`).                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use splitbill_core::money::{format_amount, Money, Percentage};
//!
//! let price = Money::from_satang(1099); // ฿10.99
//! assert_eq!(price.to_string(), "฿10.99");
//!
//! let vat = Percentage::new(Decimal::new(7, 0)).unwrap();
//! let tax = vat.apply_to(price.to_decimal());
//! assert_eq!(format_amount(tax, "฿"), "฿0.77");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

/// Currency symbol used by `Money`'s `Display` (Thai baht).
pub const CURRENCY_SYMBOL: &str = "฿";

/// Decimal places shown for amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (satang, 1/100 baht).
///
/// ## Design Decisions
/// - **i64**: enough headroom for any realistic bill
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No float constructor**: prices enter as `Decimal` and are checked
///   for at most two fractional digits before becoming `Money`
/// - **Decimal on the wire**: serialized as `"12.99"`, the same form
///   `add_item` and `ItemPatch` accept, never as raw satang
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] i64);

impl Money {
    /// Creates a Money value from satang.
    ///
    /// ## Example
    /// ```rust
    /// use splitbill_core::money::Money;
    ///
    /// let price = Money::from_satang(1099); // ฿10.99
    /// assert_eq!(price.satang(), 1099);
    /// ```
    #[inline]
    pub const fn from_satang(satang: i64) -> Self {
        Money(satang)
    }

    /// Converts a decimal amount into Money.
    ///
    /// Returns `None` when the amount has more than two fractional digits
    /// (after trailing zeros are dropped) or does not fit in i64 satang.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use splitbill_core::money::Money;
    ///
    /// let price = Money::from_decimal(Decimal::new(1299, 2)).unwrap();
    /// assert_eq!(price.satang(), 1299);
    ///
    /// // 12.990 is still 12.99
    /// assert!(Money::from_decimal(Decimal::new(12990, 3)).is_some());
    /// // 12.999 is not representable
    /// assert!(Money::from_decimal(Decimal::new(12999, 3)).is_none());
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let normalized = amount.normalize();
        if normalized.scale() > CURRENCY_DECIMALS {
            return None;
        }
        normalized
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|satang| satang.to_i64())
            .map(Money)
    }

    /// Returns the value in satang.
    #[inline]
    pub const fn satang(&self) -> i64 {
        self.0
    }

    /// Returns the whole-baht portion.
    #[inline]
    pub const fn baht(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the satang portion (always 0-99).
    #[inline]
    pub const fn satang_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as an exact decimal (`1299` → `12.99`).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CURRENCY_DECIMALS)
    }

}

/// Shows money as `฿12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.baht().abs(),
            self.satang_part()
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::from_decimal(amount).ok_or_else(|| {
            de::Error::custom(format!("{amount} is not a whole number of satang"))
        })
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// A surcharge percentage in `[0, 100]`.
///
/// ## Why Decimal?
/// Charges are entered with up to two decimals (e.g. 7.5% VAT). Keeping the
/// exact value means `subtotal * 7.5 / 100` has no representation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(#[ts(type = "string")] Decimal);

impl Percentage {
    /// Upper bound of a percentage.
    pub const MAX: Decimal = Decimal::ONE_HUNDRED;

    /// Creates a percentage, or `None` if the value is outside `[0, 100]`.
    pub fn new(value: Decimal) -> Option<Self> {
        if value < Decimal::ZERO || value > Self::MAX {
            return None;
        }
        Some(Percentage(value))
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percentage(Decimal::ZERO)
    }

    /// Returns the percentage value (`7.5` for 7.5%).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies the percentage to an amount: `amount * pct / 100`.
    ///
    /// Multiplication happens before division so a whole-number result
    /// stays whole.
    pub fn apply_to(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Rounds a full-precision amount to currency precision for display.
///
/// Midpoints round away from zero (`0.125` → `0.13`), matching how
/// receipts are usually printed.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMALS);
    rounded
}

/// Formats an amount with a currency symbol and two decimals.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use splitbill_core::money::format_amount;
///
/// let third = Decimal::ONE_HUNDRED / Decimal::from(3u64);
/// assert_eq!(format_amount(third, "฿"), "฿33.33");
/// ```
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round_for_display(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", symbol, rounded.abs())
    } else {
        format!("{}{}", symbol, rounded.abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
