//! Product routes - Product list grouped into accordion sections
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - page.rs: Product cards and the list page

pub mod api;
pub mod page;

pub use api::{api_product_detail, api_products, api_products_grouped, api_products_summary};
pub use page::{
    htmx_products_list,
    page_products,
    render_product_card,
    render_product_cards,
    render_products_list,
};
