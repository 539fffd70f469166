//! Bucketing products by account type, plus state display helpers

use bankweb_loader::{AccountState, AccountType, BankingProduct};
use bankweb_utils::capitalize;
use serde::{Deserialize, Serialize};

/// Color used for any state outside the four known ones
pub const FALLBACK_STATE_COLOR: &str = "#9ca3af";

/// Products partitioned by account type
///
/// Every known type always has a bucket, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedProducts {
    pub checking: Vec<BankingProduct>,
    pub savings: Vec<BankingProduct>,
    pub credit: Vec<BankingProduct>,
    pub investment: Vec<BankingProduct>,
}

impl GroupedProducts {
    /// Bucket for a type; unknown types have none and yield an empty slice
    pub fn bucket(&self, account_type: &AccountType) -> &[BankingProduct] {
        match account_type {
            AccountType::Checking => &self.checking,
            AccountType::Savings => &self.savings,
            AccountType::Credit => &self.credit,
            AccountType::Investment => &self.investment,
            AccountType::Other(_) => &[],
        }
    }

    fn bucket_mut(&mut self, account_type: &AccountType) -> Option<&mut Vec<BankingProduct>> {
        match account_type {
            AccountType::Checking => Some(&mut self.checking),
            AccountType::Savings => Some(&mut self.savings),
            AccountType::Credit => Some(&mut self.credit),
            AccountType::Investment => Some(&mut self.investment),
            AccountType::Other(_) => None,
        }
    }

    /// Buckets in fixed order: checking, savings, credit, investment
    pub fn iter(&self) -> impl Iterator<Item = (AccountType, &[BankingProduct])> {
        AccountType::ALL
            .into_iter()
            .map(move |t| {
                let bucket = self.bucket(&t);
                (t, bucket)
            })
    }

    /// Number of products across all buckets
    pub fn total(&self) -> usize {
        self.checking.len() + self.savings.len() + self.credit.len() + self.investment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition products by account type, preserving input order per bucket
///
/// Products with an unrecognized type are left out.
pub fn group_by_account_type(products: &[BankingProduct]) -> GroupedProducts {
    let mut grouped = GroupedProducts::default();

    for product in products {
        match grouped.bucket_mut(&product.account_type) {
            Some(bucket) => bucket.push(product.clone()),
            None => log::debug!(
                "product {} has unknown account type '{}', not grouped",
                product.id,
                product.account_type
            ),
        }
    }

    grouped
}

/// Capitalized state name (`Active`)
pub fn state_label(state: &AccountState) -> String {
    capitalize(state.as_str())
}

/// Indicator color for a state
pub fn state_color(state: &AccountState) -> &'static str {
    match state {
        AccountState::Active => "#10b981",
        AccountState::Inactive => "#f59e0b",
        AccountState::Closed => "#6b7280",
        AccountState::Frozen => "#3b82f6",
        AccountState::Other(_) => FALLBACK_STATE_COLOR,
    }
}
