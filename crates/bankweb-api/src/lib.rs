//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::products: Product list page and product JSON API
//! - routes::accordion: Section toggling (HTMX fragment and JSON)
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use bankweb_config::Config;
use bankweb_core::ProductCatalog;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
///
/// The catalog, and with it the accordion, is shared by every client.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<ProductCatalog>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, catalog: ProductCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::accordion::{api_accordion, api_accordion_toggle, htmx_accordion_toggle};
    use routes::products::{api_product_detail, api_products, api_products_grouped, api_products_summary, htmx_products_list, page_products};
    use routes::settings::{api_settings, page_settings};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/products", get(api_products))
        .route("/api/products/grouped", get(api_products_grouped))
        .route("/api/products/summary", get(api_products_summary))
        .route("/api/products/:id", get(api_product_detail))
        .route("/api/accordion", get(api_accordion))
        .route("/api/accordion/:panel_id/toggle", post(api_accordion_toggle))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(page_products))
        .route("/products", get(page_products))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/products/list", get(htmx_products_list))
        .route("/accordion/:panel_id/toggle", post(htmx_accordion_toggle))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Reload products and rebuild the accordion
async fn api_reload(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let mut catalog = state.catalog.write().await;
    let count = catalog.reload().await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Reloaded {} products", count),
        "count": count,
    })))
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Bankweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .accordion-icon {{ transition: transform 0.2s; }}
        .accordion-item[data-open='true'] .accordion-icon {{ transform: rotate(180deg); }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/products", "Products"),
        ("/settings", "Settings"),
    ];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-blue-600'>Bankweb</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label) in &links {
        let is_active = current_path.starts_with(path) || (current_path == "/" && *path == "/products");
        let active_class = if is_active { "bg-blue-50 text-blue-600" } else { "text-gray-600 hover:bg-gray-50" };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'><span>{}</span></a></li>"#,
            path, active_class, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &HeaderMap, title: &str, current_path: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!("<main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>", inner_content)
    } else {
        base_html(title, &format!(r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            nav_sidebar(current_path), inner_content))
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config, catalog: Arc<RwLock<ProductCatalog>>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { catalog, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Bankweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /products (Banking products)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use bankweb_core::DefaultProductLoader;
    use std::fs;

    pub const PRODUCTS: &str = r#"[
        {"id": "1", "iban": "DE89370400440532013000", "accountType": "checking", "accountState": "active",
         "balance": 5250.50, "currency": "EUR", "accountName": "Main Account", "lastActivity": "2025-01-15"},
        {"id": "2", "iban": "DE75512108001234567890", "accountType": "savings", "accountState": "active",
         "balance": 25000.00, "accountName": "Emergency <Fund>"},
        {"id": "3", "iban": "DE12500105170648489890", "accountType": "credit", "accountState": "frozen",
         "balance": -3500.00, "currency": "EUR"}
    ]"#;

    /// State backed by a loaded catalog in a temporary directory
    pub async fn loaded_state(products: &str) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("products.json"), products).unwrap();

        let mut config = Config::default();
        config.data.path = dir.path().to_path_buf();

        let mut catalog = ProductCatalog::new(config.clone(), Arc::new(DefaultProductLoader::default()));
        catalog.load().await.unwrap();
        (dir, AppState::new(config, catalog))
    }

    pub async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
