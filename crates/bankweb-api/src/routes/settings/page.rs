//! Settings page rendering - Full page endpoints

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use bankweb_utils::escape_html;

use crate::AppState;

fn setting(label: &str, value: &str) -> String {
    format!(
        "<div><p class='text-sm text-gray-500'>{}</p><p class='font-medium'>{}</p></div>",
        label,
        escape_html(value)
    )
}

fn card(title: &str, items: &[String]) -> String {
    format!(
        "<div class='bg-white rounded-xl shadow-sm p-6 mb-6'><h3 class='text-lg font-semibold mb-4'>{}</h3><div class='grid grid-cols-2 gap-4'>{}</div></div>",
        title,
        items.concat()
    )
}

pub async fn page_settings(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let config = &state.config;

    let initially_open = if config.accordion.initially_open.is_empty() {
        "None".to_string()
    } else {
        config.accordion.initially_open.join(", ")
    };

    let inner_content = format!(
        "<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>{}{}{}{}",
        card("Server", &[
            setting("Host", &config.server.host),
            setting("Port", &config.server.port.to_string()),
        ]),
        card("Data", &[
            setting("Data directory", &config.data.path.display().to_string()),
            setting("Products file", &config.data.products_file),
        ]),
        card("Accordion", &[
            setting("Multiple open sections", if config.accordion.allow_multiple { "Allowed" } else { "One at a time" }),
            setting("Initially open", &initially_open),
        ]),
        card("Currency", &[
            setting("Default currency", &config.currency.default_currency),
            setting("Decimal places", &config.currency.decimal_places.to_string()),
            setting("Thousands separator", &config.currency.thousands_separator),
            setting("Decimal separator", &config.currency.decimal_separator),
        ]),
    );

    Html(crate::page_response(&headers, "Settings", "/settings", &inner_content))
}
