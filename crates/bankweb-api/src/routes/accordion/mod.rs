//! Accordion routes - Section rendering and toggling
//!
//! One button activation posts to `/accordion/:panel_id/toggle`, which
//! toggles exactly one panel in the shared group and returns the whole
//! accordion, since the single-open policy may have closed other panels.

pub mod api;
pub mod page;

pub use api::{api_accordion, api_accordion_toggle, AccordionState};
pub use page::{htmx_accordion_toggle, render_accordion, render_panel, ACCORDION_ID};
