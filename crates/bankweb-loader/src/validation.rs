//! Ingestion checks applied to raw product records

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::error::LoadError;
use crate::types::BankingProduct;

static IBAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2}[0-9]{2}[A-Za-z0-9]{1,30}$").expect("valid IBAN regex")
});

/// Where a record came from, used in error messages
#[derive(Debug, Clone)]
pub struct RecordLocation<'a> {
    pub source: &'a str,
    pub index: usize,
}

impl RecordLocation<'_> {
    pub fn error(&self, field: &str, reason: &str) -> LoadError {
        LoadError::ValidationError {
            location: self.source.to_string(),
            index: self.index,
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Require a present, non-blank string field
pub fn require_field(loc: &RecordLocation<'_>, field: &str, value: Option<String>) -> Result<String, LoadError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(loc.error(field, "must not be empty")),
        None => Err(loc.error(field, "is required")),
    }
}

/// Strip whitespace from an IBAN and check its shape
pub fn normalize_iban(loc: &RecordLocation<'_>, raw: &str) -> Result<String, LoadError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if IBAN_RE.is_match(&compact) {
        Ok(compact)
    } else {
        Err(loc.error("iban", "is not a valid IBAN"))
    }
}

/// Accept `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_activity_date(loc: &RecordLocation<'_>, raw: &str) -> Result<NaiveDate, LoadError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| loc.error("lastActivity", "is not a valid date"))
}

/// Reject repeated product ids
pub fn check_unique_ids(products: &[BankingProduct]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(LoadError::DuplicateId { id: product.id.clone() });
        }
    }
    Ok(())
}
