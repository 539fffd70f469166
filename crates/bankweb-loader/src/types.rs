//! Banking product types produced by the loader

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type of a banking product
///
/// Unrecognized values are kept as `Other` so downstream utilities stay total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
    Investment,
    Other(String),
}

impl AccountType {
    /// Known account types in display order
    pub const ALL: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Credit,
        AccountType::Investment,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
            AccountType::Investment => "investment",
            AccountType::Other(s) => s,
        }
    }

    /// Whether this is one of the four known types
    pub fn is_known(&self) -> bool {
        !matches!(self, AccountType::Other(_))
    }
}

impl From<&str> for AccountType {
    fn from(s: &str) -> Self {
        match s {
            "checking" => AccountType::Checking,
            "savings" => AccountType::Savings,
            "credit" => AccountType::Credit,
            "investment" => AccountType::Investment,
            other => AccountType::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountType {
    fn from(s: String) -> Self {
        AccountType::from(s.as_str())
    }
}

impl From<AccountType> for String {
    fn from(t: AccountType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a banking product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountState {
    Active,
    Inactive,
    Closed,
    Frozen,
    Other(String),
}

impl AccountState {
    pub fn as_str(&self) -> &str {
        match self {
            AccountState::Active => "active",
            AccountState::Inactive => "inactive",
            AccountState::Closed => "closed",
            AccountState::Frozen => "frozen",
            AccountState::Other(s) => s,
        }
    }
}

impl From<&str> for AccountState {
    fn from(s: &str) -> Self {
        match s {
            "active" => AccountState::Active,
            "inactive" => AccountState::Inactive,
            "closed" => AccountState::Closed,
            "frozen" => AccountState::Frozen,
            other => AccountState::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountState {
    fn from(s: String) -> Self {
        AccountState::from(s.as_str())
    }
}

impl From<AccountState> for String {
    fn from(s: AccountState) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for AccountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated banking product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingProduct {
    pub id: String,
    /// IBAN without whitespace
    pub iban: String,
    pub account_type: AccountType,
    pub account_state: AccountState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<NaiveDate>,
}

impl BankingProduct {
    /// Create a product with only the required fields set
    pub fn new(
        id: impl Into<String>,
        iban: impl Into<String>,
        account_type: AccountType,
        account_state: AccountState,
    ) -> Self {
        Self {
            id: id.into(),
            iban: iban.into(),
            account_type,
            account_state,
            balance: None,
            currency: None,
            account_name: None,
            last_activity: None,
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_account_name(mut self, name: impl Into<String>) -> Self {
        self.account_name = Some(name.into());
        self
    }

    pub fn with_last_activity(mut self, date: NaiveDate) -> Self {
        self.last_activity = Some(date);
        self
    }

    /// Negative balances are rendered in red
    pub fn is_negative(&self) -> bool {
        self.balance.map_or(false, |b| b.is_sign_negative() && !b.is_zero())
    }
}

/// Supported product file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFormat {
    Json,
    Yaml,
}

impl ProductFormat {
    /// Pick a format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ProductFormat::Json),
            "yaml" | "yml" => Some(ProductFormat::Yaml),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_from_str() {
        assert_eq!(AccountType::from("checking"), AccountType::Checking);
        assert_eq!(AccountType::from("investment"), AccountType::Investment);
        assert_eq!(AccountType::from("loan"), AccountType::Other("loan".to_string()));
        assert!(!AccountType::from("loan").is_known());
    }

    #[test]
    fn test_account_state_roundtrip_string() {
        let state = AccountState::from("frozen");
        assert_eq!(state, AccountState::Frozen);
        assert_eq!(String::from(state), "frozen");
        assert_eq!(AccountState::from("pending").to_string(), "pending");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = BankingProduct::new("1", "DE89370400440532013000", AccountType::Checking, AccountState::Active)
            .with_account_name("Main Account");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["accountType"], "checking");
        assert_eq!(json["accountState"], "active");
        assert_eq!(json["accountName"], "Main Account");
        assert!(json.get("balance").is_none());
    }

    #[test]
    fn test_is_negative() {
        let product = BankingProduct::new("1", "X", AccountType::Credit, AccountState::Active);
        assert!(!product.is_negative());
        assert!(product.clone().with_balance(Decimal::new(-350000, 2)).is_negative());
        assert!(!product.with_balance(Decimal::ZERO).is_negative());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ProductFormat::from_extension("JSON"), Some(ProductFormat::Json));
        assert_eq!(ProductFormat::from_extension("yml"), Some(ProductFormat::Yaml));
        assert_eq!(ProductFormat::from_extension("csv"), None);
    }
}
