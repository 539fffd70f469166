//! Product page rendering - Full page and HTMX partial endpoints

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use bankweb_core::models::{EMPTY_MESSAGE, LIST_SUBTITLE, LIST_TITLE, LOADING_MESSAGE};
use bankweb_core::{ProductCard, ProductsListView};
use bankweb_utils::escape_html;

use crate::routes::accordion::render_accordion;
use crate::AppState;

/// Render a single product card
pub fn render_product_card(card: &ProductCard) -> String {
    let balance_html = match &card.balance {
        Some(balance) => format!(
            r#"<div class='flex items-baseline justify-between mb-2'>
                <span class='balance text-lg font-semibold {}'>{}</span>
                <span class='text-sm text-gray-500'>{}</span>
            </div>"#,
            if card.balance_positive { "text-green-600" } else { "text-red-600" },
            escape_html(balance),
            escape_html(&card.currency)
        ),
        None => String::new(),
    };

    let activity_html = card
        .last_activity
        .as_ref()
        .map(|date| format!("<p class='text-xs text-gray-500'>Last activity: {}</p>", escape_html(date)))
        .unwrap_or_default();

    format!(
        r#"<div class='product-card rounded-lg border border-gray-200 p-4 shadow-sm hover:shadow-md transition' data-product-id='{}'>
    <div class='flex items-start justify-between mb-3'>
        <div>
            <h3 class='font-semibold text-gray-900'>{}</h3>
            <p class='text-sm text-gray-500'>{}</p>
        </div>
        <div class='flex items-center'>
            <span class='inline-block w-3 h-3 rounded-full mr-2' style='background-color: {}' title='{}'></span>
            <span class='text-xs font-medium text-gray-700'>{}</span>
        </div>
    </div>
    <div class='mb-3'>
        <p class='text-xs text-gray-500 mb-1'>IBAN</p>
        <p class='font-mono text-sm text-gray-600'>{}</p>
    </div>
    {}
    {}
</div>"#,
        escape_html(&card.id),
        escape_html(&card.title),
        escape_html(&card.type_label),
        card.state_color,
        escape_html(&card.state_label),
        escape_html(&card.state_label),
        escape_html(&card.iban),
        balance_html,
        activity_html
    )
}

/// Render the cards of one section as a grid
pub fn render_product_cards(cards: &[ProductCard]) -> String {
    let cards: String = cards.iter().map(render_product_card).collect();
    format!("<div class='grid grid-cols-1 md:grid-cols-2 gap-4'>{}</div>", cards)
}

/// Render the list body for the current view state
pub fn render_products_list(view: &ProductsListView) -> String {
    let body = match view {
        ProductsListView::Loading => format!(
            "<div class='text-center py-8 text-gray-500' data-state='loading'>{}</div>",
            LOADING_MESSAGE
        ),
        ProductsListView::Error { message } => format!(
            "<div class='bg-red-50 border border-red-200 text-red-700 rounded-lg p-4' data-state='error'>{}</div>",
            escape_html(message)
        ),
        ProductsListView::Empty => format!(
            "<div class='text-center py-8 text-gray-500' data-state='empty'>{}</div>",
            EMPTY_MESSAGE
        ),
        ProductsListView::Sections { sections } => render_accordion(sections),
    };

    format!(
        r#"<div id='products-list' class='max-w-4xl'>
    <div class='mb-6'>
        <h2 class='text-2xl font-bold'>{}</h2>
        <p class='text-gray-500'>{}</p>
    </div>
    {}
</div>"#,
        LIST_TITLE, LIST_SUBTITLE, body
    )
}

/// Product list page
pub async fn page_products(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let catalog = state.catalog.read().await;
    let inner_content = render_products_list(&catalog.list_view());

    Html(crate::page_response(&headers, LIST_TITLE, "/products", &inner_content))
}

/// Product list fragment
pub async fn htmx_products_list(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog.read().await;
    Html(render_products_list(&catalog.list_view()))
}
