//! # Session Configuration
//!
//! Settings a session starts with.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SPLITBILL_*`)
//! 2. Defaults (this file)
//!
//! Values that fail to parse are ignored with a warning; the default stays.
//! Default charges are applied through the store's own validation when the
//! session is created, so an out-of-range `SPLITBILL_TAX` is rejected there.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitbill_core::money::{format_amount, CURRENCY_SYMBOL};
use splitbill_core::ChargesPatch;
use std::str::FromStr;
use tracing::warn;

/// Default `tracing` filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,splitbill=debug";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Currency code (ISO 4217), informational only
    pub currency_code: String,

    /// Currency symbol used by `format_currency`
    pub currency_symbol: String,

    /// Service charge a new bill starts with, in percent
    pub default_service_charge: Decimal,

    /// Tax a new bill starts with, in percent
    pub default_tax: Decimal,

    /// `tracing` filter directive used by `init_tracing`
    pub log_filter: String,
}

impl Default for SessionConfig {
    /// Thai baht, no service charge, no tax.
    fn default() -> Self {
        SessionConfig {
            currency_code: "THB".to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            default_service_charge: Decimal::ZERO,
            default_tax: Decimal::ZERO,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SPLITBILL_CURRENCY_CODE`: e.g. "THB"
    /// - `SPLITBILL_CURRENCY_SYMBOL`: e.g. "฿"
    /// - `SPLITBILL_SERVICE_CHARGE`: default service charge, e.g. "10"
    /// - `SPLITBILL_TAX`: default tax, e.g. "7"
    /// - `SPLITBILL_LOG`: tracing filter, e.g. "debug"
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(code) = lookup("SPLITBILL_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("SPLITBILL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(value) = lookup("SPLITBILL_SERVICE_CHARGE") {
            match Decimal::from_str(value.trim()) {
                Ok(pct) => config.default_service_charge = pct,
                Err(e) => warn!(%value, error = %e, "Ignoring SPLITBILL_SERVICE_CHARGE"),
            }
        }

        if let Some(value) = lookup("SPLITBILL_TAX") {
            match Decimal::from_str(value.trim()) {
                Ok(pct) => config.default_tax = pct,
                Err(e) => warn!(%value, error = %e, "Ignoring SPLITBILL_TAX"),
            }
        }

        if let Some(filter) = lookup("SPLITBILL_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// The charges a new bill should start with.
    pub fn default_charges(&self) -> ChargesPatch {
        ChargesPatch::default()
            .service_charge(self.default_service_charge)
            .tax(self.default_tax)
    }

    /// Formats a full-precision amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use splitbill_session::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_currency(Decimal::new(585, 1)), "฿58.50");
    /// ```
    pub fn format_currency(&self, amount: Decimal) -> String {
        format_amount(amount, &self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.currency_code, "THB");
        assert_eq!(config.currency_symbol, "฿");
        assert_eq!(config.default_service_charge, dec!(0));
        assert_eq!(config.default_tax, dec!(0));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("SPLITBILL_CURRENCY_SYMBOL", "$"),
            ("SPLITBILL_SERVICE_CHARGE", "10"),
            ("SPLITBILL_TAX", " 7.5 "),
        ]));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_service_charge, dec!(10));
        assert_eq!(config.default_tax, dec!(7.5));
        assert_eq!(config.currency_code, "THB");
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = SessionConfig::from_lookup(lookup(&[("SPLITBILL_TAX", "seven")]));
        assert_eq!(config.default_tax, dec!(0));
    }

    #[test]
    fn test_format_currency() {
        let config = SessionConfig::default();
        assert_eq!(config.format_currency(dec!(1234.5)), "฿1234.50");
        assert_eq!(config.format_currency(dec!(100) / dec!(3)), "฿33.33");
        assert_eq!(config.format_currency(dec!(0)), "฿0.00");
    }
}
