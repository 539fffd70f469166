//! View models handed to the rendering layer

use bankweb_loader::BankingProduct;
use serde::{Deserialize, Serialize};

use crate::accordion::PanelId;
use crate::format::{format_account_type, format_date, format_iban, BalanceFormat};
use crate::grouping::{state_color, state_label};

/// Page heading of the product list
pub const LIST_TITLE: &str = "Banking Products";
/// Sub-heading of the product list
pub const LIST_SUBTITLE: &str = "Manage your accounts and view account details";
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No banking products available";

/// Display-ready product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    /// Account name, or the capitalized type when unnamed
    pub title: String,
    /// Raw account type, shown under the title
    pub type_label: String,
    pub state_label: String,
    pub state_color: String,
    pub iban: String,
    pub balance: Option<String>,
    /// Zero counts as positive
    pub balance_positive: bool,
    pub currency: String,
    pub last_activity: Option<String>,
}

impl ProductCard {
    pub fn from_product(product: &BankingProduct, format: &BalanceFormat, default_currency: &str) -> Self {
        Self {
            id: product.id.clone(),
            title: product
                .account_name
                .clone()
                .unwrap_or_else(|| format_account_type(&product.account_type)),
            type_label: product.account_type.to_string(),
            state_label: state_label(&product.account_state),
            state_color: state_color(&product.account_state).to_string(),
            iban: format_iban(&product.iban),
            balance: product.balance.map(|b| format.format(b)),
            balance_positive: !product.is_negative(),
            currency: product
                .currency
                .clone()
                .unwrap_or_else(|| default_currency.to_string()),
            last_activity: product.last_activity.map(format_date),
        }
    }
}

/// One accordion section of the product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSection {
    pub panel_id: PanelId,
    /// e.g. `Checking (2)`
    pub heading: String,
    pub is_open: bool,
    pub cards: Vec<ProductCard>,
}

/// What the product list should show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ProductsListView {
    Loading,
    Error { message: String },
    Empty,
    Sections { sections: Vec<ProductSection> },
}

impl ProductsListView {
    /// Sections, if the list is showing any
    pub fn sections(&self) -> &[ProductSection] {
        match self {
            ProductsListView::Sections { sections } => sections,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankweb_loader::{AccountState, AccountType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn main_account() -> BankingProduct {
        BankingProduct::new("1", "DE89370400440532013000", AccountType::Checking, AccountState::Active)
            .with_balance(Decimal::new(52505, 1))
            .with_currency("EUR")
            .with_account_name("Main Account")
            .with_last_activity(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    #[test]
    fn test_card_from_full_product() {
        let card = ProductCard::from_product(&main_account(), &BalanceFormat::default(), "EUR");
        assert_eq!(card.title, "Main Account");
        assert_eq!(card.type_label, "checking");
        assert_eq!(card.state_label, "Active");
        assert_eq!(card.state_color, "#10b981");
        assert_eq!(card.iban, "DE89 3704 0044 0532 013000");
        assert_eq!(card.balance.as_deref(), Some("5,250.50"));
        assert!(card.balance_positive);
        assert_eq!(card.currency, "EUR");
        assert_eq!(card.last_activity.as_deref(), Some("Jan 15, 2025"));
    }

    #[test]
    fn test_card_fallbacks() {
        let product = BankingProduct::new("2", "DE75512108001234567890", AccountType::Savings, AccountState::Other("pending".to_string()));
        let card = ProductCard::from_product(&product, &BalanceFormat::default(), "USD");
        assert_eq!(card.title, "Savings");
        assert_eq!(card.state_label, "Pending");
        assert_eq!(card.state_color, "#9ca3af");
        assert_eq!(card.balance, None);
        assert_eq!(card.currency, "USD");
        assert_eq!(card.last_activity, None);
    }

    #[test]
    fn test_card_negative_balance() {
        let product = main_account().with_balance(Decimal::new(-3500, 0));
        let card = ProductCard::from_product(&product, &BalanceFormat::default(), "EUR");
        assert_eq!(card.balance.as_deref(), Some("-3,500.00"));
        assert!(!card.balance_positive);
    }

    #[test]
    fn test_list_view_sections_accessor() {
        assert!(ProductsListView::Empty.sections().is_empty());
        assert!(ProductsListView::Loading.sections().is_empty());
    }
}
