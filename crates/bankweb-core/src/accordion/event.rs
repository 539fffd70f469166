//! Notification contract shared by panels and groups

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a panel instance
///
/// Two panels with the same heading still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(u64);

impl PanelId {
    /// Allocate a fresh, process-unique id
    pub(crate) fn next() -> Self {
        PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PanelId {
    fn from(id: u64) -> Self {
        PanelId(id)
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PanelId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(PanelId)
            .map_err(|_| format!("Invalid panel id: {}", s))
    }
}

/// Emitted by a panel whenever its open state actually changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelToggled {
    pub panel_id: PanelId,
    pub is_open: bool,
}

/// Callback invoked synchronously for every `PanelToggled`
pub type ToggleCallback = Box<dyn Fn(&PanelToggled) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
