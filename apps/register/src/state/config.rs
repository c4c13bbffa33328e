//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`OMNIPOS_*`)
//! 2. Defaults (this file)
//!
//! The sales tax rate is part of the engine, not of this configuration; it
//! is reported here for display but cannot be overridden.
//!
//! Configuration is read-only after initialization, so no mutex is needed.

use serde::Serialize;
use omnipos_core::TAX_RATE;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown on receipts)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Sales tax in basis points. Informational.
    pub tax_rate_bps: u32,

    /// Load the starter catalog and customers at startup.
    pub seed_data: bool,

    /// How many sales the dashboard lists.
    pub recent_sales_limit: usize,

    /// How many products the best-seller report lists.
    pub best_sellers_limit: usize,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "OmniPOS Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: TAX_RATE.bps(),
            seed_data: true,
            recent_sales_limit: 5,
            best_sellers_limit: 5,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `OMNIPOS_STORE_NAME`: Override store name
    /// - `OMNIPOS_CURRENCY_CODE`: Override currency code
    /// - `OMNIPOS_CURRENCY_SYMBOL`: Override currency symbol
    /// - `OMNIPOS_SEED`: `0`/`false` starts with an empty catalog
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("OMNIPOS_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("OMNIPOS_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("OMNIPOS_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(seed) = lookup("OMNIPOS_SEED") {
            config.seed_data = !matches!(
                seed.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use omnipos_register_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
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
