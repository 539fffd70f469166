//! Accordion rendering - HTMX fragments

use axum::extract::{Path, State};
use axum::response::Html;
use bankweb_core::{PanelId, ProductSection};
use bankweb_utils::escape_html;

use super::api::parse_panel_id;
use crate::routes::products::render_product_cards;
use crate::{ApiError, AppState};

/// Element id of the accordion container, the swap target of every toggle
pub const ACCORDION_ID: &str = "products-accordion";

/// Render one panel: a header button and a body that is hidden while closed
///
/// The open state is reflected in `data-open` and `aria-expanded`. The
/// button posts a single toggle for this panel.
pub fn render_panel(panel_id: PanelId, heading: &str, is_open: bool, body: &str) -> String {
    let content_id = format!("accordion-content-{}", panel_id);
    format!(
        r##"<div class='accordion-item border-b border-gray-200' role='region' data-panel-id='{id}' data-open='{open}'>
    <button type='button' class='accordion-header w-full flex items-center justify-between px-4 py-3 text-left font-semibold text-gray-900 bg-gray-100 hover:bg-gray-200'
        hx-post='/accordion/{id}/toggle' hx-target='#{target}' hx-swap='outerHTML'
        aria-expanded='{open}' aria-controls='{content_id}'>
        <span>{heading}</span>
        <svg class='accordion-icon w-5 h-5 flex-shrink-0' fill='none' stroke='currentColor' viewBox='0 0 24 24'><path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M19 14l-7 7m0 0l-7-7m7 7V3'></path></svg>
    </button>
    <div id='{content_id}' class='accordion-content'{hidden}>
        <div class='accordion-body px-4 py-3 bg-white'>{body}</div>
    </div>
</div>"##,
        id = panel_id,
        open = is_open,
        target = ACCORDION_ID,
        content_id = content_id,
        heading = escape_html(heading),
        hidden = if is_open { "" } else { " hidden" },
        body = body,
    )
}

/// Render all sections as one accordion container
pub fn render_accordion(sections: &[ProductSection]) -> String {
    let panels: String = sections
        .iter()
        .map(|s| render_panel(s.panel_id, &s.heading, s.is_open, &render_product_cards(&s.cards)))
        .collect();
    format!(
        "<div id='{}' class='bg-white rounded-xl shadow-sm overflow-hidden'>{}</div>",
        ACCORDION_ID, panels
    )
}

/// Toggle one section and return the re-rendered accordion
pub async fn htmx_accordion_toggle(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let panel_id = parse_panel_id(&panel_id)?;
    let mut catalog = state.catalog.write().await;
    let is_open = catalog.toggle_section(panel_id)?;
    log::debug!("section {} toggled, open={}", panel_id, is_open);

    Ok(Html(render_accordion(catalog.list_view().sections())))
}
