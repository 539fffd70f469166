//! Basic types for the product catalog

use bankweb_loader::AccountType;
use serde::{Deserialize, Serialize};

/// Load status of the product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum ListStatus {
    /// Nothing loaded yet
    Loading,
    /// Last load failed
    Failed(String),
    /// Products are available (possibly none)
    Ready,
}

impl Default for ListStatus {
    fn default() -> Self {
        ListStatus::Loading
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStatus::Loading => write!(f, "loading"),
            ListStatus::Failed(message) => write!(f, "failed: {}", message),
            ListStatus::Ready => write!(f, "ready"),
        }
    }
}

/// Product count for one account type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub account_type: AccountType,
    pub count: usize,
}

/// Overview of the loaded catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub status: ListStatus,
    pub total: usize,
    /// Products whose type is not one of the known four
    pub ungrouped: usize,
    pub by_type: Vec<TypeCount>,
}
