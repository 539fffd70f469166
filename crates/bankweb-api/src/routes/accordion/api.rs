//! Accordion API endpoints - JSON API

use axum::extract::{Path, State};
use axum::Json;
use bankweb_core::{PanelId, PanelSnapshot, ProductCatalog, Section};
use serde::{Deserialize, Serialize};

use crate::{ApiError, AppState};

/// Open state of every section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionState {
    pub allow_multiple: bool,
    pub sections: Vec<Section>,
    pub panels: Vec<PanelSnapshot>,
}

impl AccordionState {
    fn of(catalog: &ProductCatalog) -> Self {
        let accordion = catalog.accordion();
        Self {
            allow_multiple: accordion.group().allow_multiple(),
            sections: accordion.sections().to_vec(),
            panels: accordion.group().snapshots(),
        }
    }
}

pub(crate) fn parse_panel_id(raw: &str) -> Result<PanelId, ApiError> {
    raw.parse::<PanelId>().map_err(|e| ApiError::BadRequest { message: e })
}

pub async fn api_accordion(State(state): State<AppState>) -> Json<AccordionState> {
    let catalog = state.catalog.read().await;
    Json(AccordionState::of(&catalog))
}

pub async fn api_accordion_toggle(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> Result<Json<AccordionState>, ApiError> {
    let panel_id = parse_panel_id(&panel_id)?;
    let mut catalog = state.catalog.write().await;
    catalog.toggle_section(panel_id)?;
    Ok(Json(AccordionState::of(&catalog)))
}
