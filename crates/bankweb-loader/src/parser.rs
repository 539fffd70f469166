//! Product record parser
//!
//! Turns JSON or YAML text into validated `BankingProduct` values. Field
//! names follow the camelCase shape of the mock data (`accountType`), with
//! snake_case accepted as an alias.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::LoadError;
use crate::types::{AccountState, AccountType, BankingProduct, ProductFormat};
use crate::validation::{self, RecordLocation};

/// Record as it appears in a data file, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: Option<String>,
    iban: Option<String>,
    #[serde(alias = "account_type")]
    account_type: Option<String>,
    #[serde(alias = "account_state")]
    account_state: Option<String>,
    balance: Option<Decimal>,
    currency: Option<String>,
    #[serde(alias = "account_name")]
    account_name: Option<String>,
    #[serde(alias = "last_activity")]
    last_activity: Option<String>,
}

/// Simple product parser
pub struct SimpleProductParser;

impl SimpleProductParser {
    /// Parse product records from text
    pub fn parse(content: &str, format: ProductFormat) -> Result<Vec<BankingProduct>, LoadError> {
        Self::parse_with_source(content, format, None)
    }

    /// Parse product records from text, tagging errors with the source name
    pub fn parse_with_source(
        content: &str,
        format: ProductFormat,
        source: Option<&str>,
    ) -> Result<Vec<BankingProduct>, LoadError> {
        let source = source.unwrap_or("<inline>");

        // An empty file is an empty product list
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<RawProduct> = match format {
            ProductFormat::Json => serde_json::from_str(content).map_err(|e| LoadError::SyntaxError {
                location: source.to_string(),
                message: e.to_string(),
            })?,
            ProductFormat::Yaml => serde_yaml::from_str(content).map_err(|e| LoadError::SyntaxError {
                location: source.to_string(),
                message: e.to_string(),
            })?,
        };

        let products = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| Self::validate_record(record, &RecordLocation { source, index }))
            .collect::<Result<Vec<_>, _>>()?;

        validation::check_unique_ids(&products)?;

        log::debug!("Parsed {} product records from {}", products.len(), source);
        Ok(products)
    }

    fn validate_record(raw: RawProduct, loc: &RecordLocation<'_>) -> Result<BankingProduct, LoadError> {
        let id = validation::require_field(loc, "id", raw.id)?;
        let iban = validation::require_field(loc, "iban", raw.iban)?;
        let iban = validation::normalize_iban(loc, &iban)?;
        let account_type = validation::require_field(loc, "accountType", raw.account_type)?;
        let account_state = validation::require_field(loc, "accountState", raw.account_state)?;

        let account_type = AccountType::from(account_type.to_lowercase());
        if !account_type.is_known() {
            log::warn!("{} record {}: unknown account type '{}'", loc.source, loc.index, account_type);
        }

        let last_activity = match raw.last_activity.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(validation::parse_activity_date(loc, s)?),
            _ => None,
        };

        Ok(BankingProduct {
            id,
            iban,
            account_type,
            account_state: AccountState::from(account_state.to_lowercase()),
            balance: raw.balance,
            currency: raw.currency.filter(|c| !c.trim().is_empty()),
            account_name: raw.account_name.filter(|n| !n.trim().is_empty()),
            last_activity,
        })
    }
}

// ==================== Tests ====================
