//! Route modules for the API server
//!
//! - products: Product list page, product cards, product JSON API
//! - accordion: Accordion rendering and section toggling
//! - settings: Settings page
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints
//! - page.rs: HTMX page rendering

pub mod accordion;
pub mod products;
pub mod settings;
