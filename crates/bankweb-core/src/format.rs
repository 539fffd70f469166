//! Display formatting for product fields

use bankweb_config::CurrencyConfig;
use bankweb_loader::AccountType;
use bankweb_utils::{capitalize, format_number};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Split an IBAN into space-separated groups of 4 characters
///
/// A trailing remainder shorter than 4 characters stays attached to the
/// last full group, so no separator is left dangling at the end.
pub fn format_iban(iban: &str) -> String {
    let chars: Vec<char> = iban.trim().chars().collect();
    let mut groups: Vec<String> = chars.chunks(4).map(|c| c.iter().collect()).collect();

    if groups.len() > 1 && groups.last().map_or(false, |g| g.chars().count() < 4) {
        if let Some(tail) = groups.pop() {
            if let Some(last) = groups.last_mut() {
                last.push_str(&tail);
            }
        }
    }

    groups.join(" ")
}

/// Number formatting rules for balances
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceFormat {
    pub decimal_places: u32,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for BalanceFormat {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl From<&CurrencyConfig> for BalanceFormat {
    fn from(config: &CurrencyConfig) -> Self {
        Self {
            decimal_places: config.decimal_places,
            thousands_separator: config.thousands_separator.clone(),
            decimal_separator: config.decimal_separator.clone(),
        }
    }
}

impl BalanceFormat {
    /// Fixed decimal places, grouped thousands, sign kept
    pub fn format(&self, amount: Decimal) -> String {
        let dp = self.decimal_places;
        let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{:.*}", dp as usize, rounded);

        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let grouped = format_number(int_part, &self.thousands_separator);
        match frac_part {
            Some(frac) => format!("{}{}{}", grouped, self.decimal_separator, frac),
            None => grouped,
        }
    }
}

/// Balance with two decimals in en-US style (`5,250.50`)
pub fn format_balance(amount: Decimal) -> String {
    BalanceFormat::default().format(amount)
}

/// Medium en-US date (`Jan 15, 2025`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Capitalized account type (`Checking`)
pub fn format_account_type(account_type: &AccountType) -> String {
    capitalize(account_type.as_str())
}
