//! Plain text reporter

use crate::domain::{AccountSummary, Transaction};
use crate::ports::Reporter;

/// Renders single-line plain text, prefixing money with a currency symbol
#[derive(Debug, Clone)]
pub struct PlainTextReporter {
    currency_symbol: String,
}

impl PlainTextReporter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, value: impl std::fmt::Display) -> String {
        format!("{}{}", self.currency_symbol, value)
    }
}

impl Default for PlainTextReporter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl Reporter for PlainTextReporter {
    fn render_account(&self, account: &AccountSummary) -> String {
        let mut line = format!(
            "#{} {} balance {} (available {})",
            account.account_number,
            account.account_type,
            self.money(account.balance),
            self.money(account.available)
        );
        if !account.owners.is_empty() {
            line.push_str(&format!(" owners: {}", account.owners.join(", ")));
        }
        line
    }

    fn render_transaction(&self, transaction: &Transaction) -> String {
        let target = match transaction.to_account() {
            Some(to) => format!("#{} -> #{}", transaction.from_account(), to),
            None => format!("#{}", transaction.from_account()),
        };
        format!(
            "{} {} {} {}",
            transaction.timestamp().format("%Y-%m-%d %H:%M:%S"),
            transaction.transaction_type(),
            target,
            self.money(transaction.amount())
        )
    }
}
