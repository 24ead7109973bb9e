//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKBOOK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use stockbook_core::types::TaxConfig;

/// Session configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed on invoices)
    pub store_name: String,

    /// Store address lines (for invoices)
    pub store_address: Vec<String>,

    /// GST identification number of the store, if registered
    pub gstin: Option<String>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// GST configuration new drafts start with
    pub default_tax: TaxConfig,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Stockbook Dev Store"
    /// - Currency: INR (₹), 2 decimals
    /// - Tax: IGST 18%
    fn default() -> Self {
        ConfigState {
            store_name: "Stockbook Dev Store".to_string(),
            store_address: vec!["12 Market Road".to_string(), "Pune, MH 411001".to_string()],
            gstin: None,
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            default_tax: TaxConfig::Igst { rate_bps: 1800 },
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKBOOK_STORE_NAME`: Override store name
    /// - `STOCKBOOK_GSTIN`: Set the store's GSTIN
    /// - `STOCKBOOK_IGST_RATE`: Override the default IGST rate (e.g., "18")
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("STOCKBOOK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(gstin) = std::env::var("STOCKBOOK_GSTIN") {
            config.gstin = Some(gstin);
        }

        if let Ok(rate_str) = std::env::var("STOCKBOOK_IGST_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.default_tax = TaxConfig::Igst {
                    rate_bps: (rate * 100.0) as u32,
                };
            }
        }

        config
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(105_700), "₹1057.00");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = paise / divisor;
        let frac = (paise % divisor).abs();

        format!(
            "{}{}{}",
            if paise < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(105_700), "₹1057.00");
        assert_eq!(config.format_currency(100), "₹1.00");
        assert_eq!(config.format_currency(1), "₹0.01");
        assert_eq!(config.format_currency(0), "₹0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-₹12.34");
    }

    #[test]
    fn test_default_tax_is_igst_eighteen() {
        let config = ConfigState::default();
        assert_eq!(config.default_tax, TaxConfig::Igst { rate_bps: 1800 });
    }
}
