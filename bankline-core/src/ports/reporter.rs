//! Reporting port

use crate::domain::{AccountSummary, CustomerSummary, Transaction};

/// Turns domain data into display text. The core never parses the output.
pub trait Reporter {
    fn render_account(&self, account: &AccountSummary) -> String;

    fn render_transaction(&self, transaction: &Transaction) -> String;

    /// Customer header followed by one line per account
    fn render_customer(&self, customer: &CustomerSummary) -> String {
        let mut lines = vec![format!("{} <{}>", customer.name, customer.contact_info)];
        lines.extend(customer.accounts.iter().map(|a| self.render_account(a)));
        lines.join("\n")
    }
}
