//! A single collapsible panel

use serde::{Deserialize, Serialize};

use super::event::{PanelId, PanelToggled, SubscriptionId, ToggleCallback};

/// Open state of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Initial state
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    fn flipped(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelState::Closed => write!(f, "closed"),
            PanelState::Open => write!(f, "open"),
        }
    }
}

/// Read-only projection of a panel for display layers and JSON responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub heading: String,
    pub is_open: bool,
}

/// Collapsible content unit with its own open/closed state
///
/// The panel only ever changes its own state. Every real transition is
/// announced to the subscribers registered on it; a group listens the same
/// way, so the panel never needs to know which group (if any) it belongs to.
pub struct Panel {
    id: PanelId,
    heading: String,
    state: PanelState,
    subscribers: Vec<(SubscriptionId, ToggleCallback)>,
    next_subscription: u64,
}

impl Panel {
    /// Create a closed panel
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            id: PanelId::next(),
            heading: heading.into(),
            state: PanelState::Closed,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flip the state; always emits
    pub fn toggle(&mut self) -> PanelToggled {
        self.state = self.state.flipped();
        log::debug!("panel {} ({}) -> {}", self.id, self.heading, self.state);
        self.emit()
    }

    /// Open the panel; emits nothing when already open
    pub fn open(&mut self) -> Option<PanelToggled> {
        if self.is_open() {
            None
        } else {
            Some(self.toggle())
        }
    }

    /// Close the panel; emits nothing when already closed
    pub fn close(&mut self) -> Option<PanelToggled> {
        if self.is_open() {
            Some(self.toggle())
        } else {
            None
        }
    }

    /// Register a callback for every state change of this panel
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&PanelToggled) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            id: self.id,
            heading: self.heading.clone(),
            is_open: self.is_open(),
        }
    }

    fn emit(&self) -> PanelToggled {
        let event = PanelToggled {
            panel_id: self.id,
            is_open: self.is_open(),
        };
        for (_, callback) in &self.subscribers {
            callback(&event);
        }
        event
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("heading", &self.heading)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
