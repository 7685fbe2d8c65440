//! Configuration management
//!
//! Optional `settings.json` in the bankline directory:
//! ```json
//! {
//!   "bank": {
//!     "currencySymbol": "$",
//!     "defaultOverdraftLimit": "0.00",
//!     "defaultInterestRate": "0.00",
//!     "firstAccountNumber": 1000
//!   }
//! }
//! ```
//! Only configuration lives here; account state is never persisted.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Money;

/// Environment variable overriding the currency symbol
pub const CURRENCY_SYMBOL_ENV: &str = "BANKLINE_CURRENCY_SYMBOL";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    bank: BankSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankSettings {
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
    #[serde(default)]
    default_overdraft_limit: Money,
    #[serde(default)]
    default_interest_rate: Decimal,
    #[serde(default = "default_first_account_number")]
    first_account_number: u64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for BankSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            default_overdraft_limit: Money::ZERO,
            default_interest_rate: Decimal::ZERO,
            first_account_number: default_first_account_number(),
            other: HashMap::new(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_first_account_number() -> u64 {
    1000
}

/// Bankline configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub currency_symbol: String,
    /// Overdraft given to checking accounts opened without an explicit limit
    pub default_overdraft_limit: Money,
    /// Rate stored on savings accounts opened without an explicit rate
    pub default_interest_rate: Decimal,
    /// First number handed out by the account allocator
    pub first_account_number: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_settings(&BankSettings::default())
    }
}

impl Config {
    fn from_settings(settings: &BankSettings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            default_overdraft_limit: settings.default_overdraft_limit,
            default_interest_rate: settings.default_interest_rate,
            first_account_number: settings.first_account_number,
        }
    }

    /// Load config from the bankline directory
    ///
    /// A missing settings file yields the defaults. The currency symbol can
    /// be overridden with `BANKLINE_CURRENCY_SYMBOL`.
    pub fn load(bankline_dir: &Path) -> Result<Self> {
        let raw = read_settings(bankline_dir)?;
        let mut config = Self::from_settings(&raw.bank);
        config.apply_currency_override(std::env::var(CURRENCY_SYMBOL_ENV).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    fn apply_currency_override(&mut self, symbol: Option<&str>) {
        if let Some(symbol) = symbol.map(str::trim).filter(|s| !s.is_empty()) {
            self.currency_symbol = symbol.to_string();
        }
    }

    /// Reject settings no account could be opened with
    pub fn validate(&self) -> Result<()> {
        if self.default_overdraft_limit.is_negative() {
            anyhow::bail!(
                "defaultOverdraftLimit cannot be negative, got {}",
                self.default_overdraft_limit
            );
        }
        if self.default_interest_rate < Decimal::ZERO {
            anyhow::bail!(
                "defaultInterestRate cannot be negative, got {}",
                self.default_interest_rate
            );
        }
        Ok(())
    }

    /// Save config to the bankline directory
    /// Preserves settings this crate doesn't manage
    pub fn save(&self, bankline_dir: &Path) -> Result<()> {
        let settings_path = bankline_dir.join(SETTINGS_FILE);
        let mut settings = read_settings(bankline_dir)?;

        settings.bank.currency_symbol = self.currency_symbol.clone();
        settings.bank.default_overdraft_limit = self.default_overdraft_limit;
        settings.bank.default_interest_rate = self.default_interest_rate;
        settings.bank.first_account_number = self.first_account_number;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }
}

fn read_settings(bankline_dir: &Path) -> Result<SettingsFile> {
    let settings_path = bankline_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings in {:?}", settings_path))
}
