//! Accordion state machine
//!
//! - event: `PanelId` and the `PanelToggled` notification
//! - panel: a single open/closed panel that announces its own transitions
//! - group: explicit membership plus the single-open policy

pub mod event;
pub mod group;
pub mod panel;

pub use event::{PanelId, PanelToggled, SubscriptionId, ToggleCallback};
pub use group::AccordionGroup;
pub use panel::{Panel, PanelSnapshot, PanelState};
