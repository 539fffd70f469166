//! Group of panels with an optional single-open policy

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use super::event::{PanelId, PanelToggled, SubscriptionId, ToggleCallback};
use super::panel::{Panel, PanelSnapshot};

/// Queue that member panels push their notifications into
#[derive(Clone, Default)]
struct Inbox(Arc<Mutex<VecDeque<PanelToggled>>>);

impl Inbox {
    fn push(&self, event: PanelToggled) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push_back(event);
    }

    fn pop(&self) -> Option<PanelToggled> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).pop_front()
    }
}

struct Member {
    panel: Panel,
    subscription: SubscriptionId,
}

/// Container coordinating the open state of its member panels
///
/// Members are registered explicitly and kept in registration order. In
/// single-open mode (the default) a member reporting that it opened causes
/// every other open member to be closed before the triggering call
/// returns, so callers never observe two open members.
///
/// Only the "opened" transition is policed. A group never tries to repair
/// a multi-open state on its own.
pub struct AccordionGroup {
    allow_multiple: bool,
    members: Vec<Member>,
    inbox: Inbox,
    observers: Vec<ToggleCallback>,
}

impl Default for AccordionGroup {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AccordionGroup {
    pub fn new(allow_multiple: bool) -> Self {
        Self {
            allow_multiple,
            members: Vec::new(),
            inbox: Inbox::default(),
            observers: Vec::new(),
        }
    }

    /// Group where opening one panel closes the others
    pub fn single_open() -> Self {
        Self::new(false)
    }

    /// Group where every panel acts independently
    pub fn multi_open() -> Self {
        Self::new(true)
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    // ==================== Membership ====================

    /// Create a closed panel and register it
    pub fn add_panel(&mut self, heading: impl Into<String>) -> PanelId {
        self.register(Panel::new(heading))
    }

    /// Create a panel, seeding it open when the group allows multiple open
    /// panels. In single-open mode the seed is ignored.
    pub fn add_panel_with(&mut self, heading: impl Into<String>, initially_open: bool) -> PanelId {
        let mut panel = Panel::new(heading);
        if initially_open {
            if self.allow_multiple {
                panel.open();
            } else {
                log::warn!(
                    "ignoring initial-open seed for '{}' in a single-open group",
                    panel.heading()
                );
            }
        }
        self.register(panel)
    }

    /// Register an existing panel as the last member
    ///
    /// A panel that arrives already open is treated as if it had just
    /// opened, so single-open groups close their other members.
    pub fn register(&mut self, mut panel: Panel) -> PanelId {
        let id = panel.id();
        let inbox = self.inbox.clone();
        let subscription = panel.subscribe(move |event| inbox.push(*event));
        let arrived_open = panel.is_open();

        self.members.push(Member { panel, subscription });
        log::debug!("registered panel {} ({} members)", id, self.members.len());

        if arrived_open {
            self.inbox.push(PanelToggled { panel_id: id, is_open: true });
            self.settle();
        }
        id
    }

    /// Remove a member and hand the panel back, detached from this group
    pub fn deregister(&mut self, id: PanelId) -> Option<Panel> {
        let index = self.members.iter().position(|m| m.panel.id() == id)?;
        let Member { mut panel, subscription } = self.members.remove(index);
        panel.unsubscribe(subscription);
        log::debug!("deregistered panel {} ({} members)", id, self.members.len());
        Some(panel)
    }

    /// Remove every member
    pub fn clear(&mut self) {
        let ids: Vec<PanelId> = self.ids();
        for id in ids {
            self.deregister(id);
        }
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.members.iter().any(|m| m.panel.id() == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member ids in registration order
    pub fn ids(&self) -> Vec<PanelId> {
        self.members.iter().map(|m| m.panel.id()).collect()
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.members.iter().map(|m| &m.panel).find(|p| p.id() == id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.members.iter().map(|m| &m.panel)
    }

    pub fn is_open(&self, id: PanelId) -> Option<bool> {
        self.panel(id).map(Panel::is_open)
    }

    /// Ids of the open members, in registration order
    pub fn open_ids(&self) -> Vec<PanelId> {
        self.panels().filter(|p| p.is_open()).map(Panel::id).collect()
    }

    pub fn snapshots(&self) -> Vec<PanelSnapshot> {
        self.panels().map(Panel::snapshot).collect()
    }

    // ==================== Transitions ====================

    /// Toggle a member; returns its new state, or `None` for unknown ids
    pub fn toggle(&mut self, id: PanelId) -> Option<bool> {
        let panel = self.member_mut(id)?;
        panel.toggle();
        self.settle();
        self.is_open(id)
    }

    /// Open a member; no-op if already open
    pub fn open(&mut self, id: PanelId) -> Option<bool> {
        let panel = self.member_mut(id)?;
        panel.open();
        self.settle();
        self.is_open(id)
    }

    /// Close a member; no-op if already closed
    pub fn close(&mut self, id: PanelId) -> Option<bool> {
        let panel = self.member_mut(id)?;
        panel.close();
        self.settle();
        self.is_open(id)
    }

    /// Observe every notification the group processes, including the
    /// closes it triggers itself
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&PanelToggled) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(callback));
    }

    /// Apply the exclusivity policy to one notification
    ///
    /// Only reached through `settle`, so the closes it causes are drained
    /// and observed in the same call. Closing notifications, events from
    /// non-members and "opened" events for a member that is no longer open
    /// are ignored.
    fn handle(&mut self, event: &PanelToggled) {
        if self.allow_multiple || !event.is_open {
            return;
        }
        match self.is_open(event.panel_id) {
            Some(true) => {}
            Some(false) => {
                log::debug!("ignoring stale open event from panel {}", event.panel_id);
                return;
            }
            None => {
                log::warn!("ignoring toggle from non-member panel {}", event.panel_id);
                return;
            }
        }

        for member in self.members.iter_mut() {
            if member.panel.id() != event.panel_id && member.panel.is_open() {
                // Emits an is_open=false notification, which `handle` ignores
                member.panel.close();
            }
        }
    }

    fn member_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        let found = self.members.iter_mut().map(|m| &mut m.panel).find(|p| p.id() == id);
        if found.is_none() {
            log::warn!("no panel {} in this group", id);
        }
        found
    }

    /// Drain queued notifications until the group is quiescent
    fn settle(&mut self) {
        while let Some(event) = self.inbox.pop() {
            for observer in &self.observers {
                observer(&event);
            }
            self.handle(&event);
        }
    }
}

impl std::fmt::Debug for AccordionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccordionGroup")
            .field("allow_multiple", &self.allow_multiple)
            .field("members", &self.members.iter().map(|m| &m.panel).collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .finish()
    }
}
