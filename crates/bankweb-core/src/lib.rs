//! Core product catalog, grouping, formatting and accordion logic

pub mod accordion;
pub mod error;
pub mod format;
pub mod grouping;
pub mod models;
pub mod sections;
pub mod types;

use bankweb_config::Config;
use bankweb_loader::LoaderRef;

pub use accordion::{AccordionGroup, Panel, PanelId, PanelSnapshot, PanelState, PanelToggled};
pub use bankweb_loader::{AccountState, AccountType, BankingProduct, DefaultProductLoader, ProductLoaderTrait};
pub use error::{CoreError, ErrorCode, ErrorDetails, ErrorSeverity};
pub use format::{format_account_type, format_balance, format_date, format_iban, BalanceFormat};
pub use grouping::{group_by_account_type, state_color, state_label, GroupedProducts};
pub use models::{ProductCard, ProductSection, ProductsListView};
pub use sections::{ProductAccordion, Section};
pub use types::{CatalogSummary, ListStatus, TypeCount};

/// Loaded banking products plus the accordion that presents them
///
/// Starts in [`ListStatus::Loading`]. A failed load keeps the previous
/// products but drops every section and reports the failure through
/// [`ProductCatalog::status`].
pub struct ProductCatalog {
    config: Config,
    loader: LoaderRef,
    status: ListStatus,
    products: Vec<BankingProduct>,
    grouped: GroupedProducts,
    accordion: ProductAccordion,
}

impl ProductCatalog {
    /// Create an empty catalog with config and loader
    pub fn new(config: Config, loader: LoaderRef) -> Self {
        let accordion = ProductAccordion::new(config.accordion.allow_multiple);
        Self {
            config,
            loader,
            status: ListStatus::Loading,
            products: Vec::new(),
            grouped: GroupedProducts::default(),
            accordion,
        }
    }

    /// Load products from the configured data path
    ///
    /// Returns the number of products loaded.
    pub async fn load(&mut self) -> Result<usize, CoreError> {
        let result = if self.config.products_is_pattern() {
            self.loader
                .load_pattern(self.config.data.path.clone(), &self.config.data.products_file)
                .await
        } else {
            self.loader.load_file(self.config.products_path()).await
        };

        match result {
            Ok(products) => {
                self.set_products(products);
                Ok(self.products.len())
            }
            Err(e) => {
                let error = CoreError::from(e);
                error::log_error("load products", &error);
                self.status = ListStatus::Failed(error.to_string());
                // Sections are only shown for a successful load
                self.accordion.clear();
                Err(error)
            }
        }
    }

    /// Reload from disk and rebuild the accordion
    pub async fn reload(&mut self) -> Result<usize, CoreError> {
        log::info!("Reloading products from {}", self.config.products_path().display());
        self.load().await
    }

    /// Replace the product list directly
    pub fn set_products(&mut self, products: Vec<BankingProduct>) {
        self.products = products;
        self.grouped = group_by_account_type(&self.products);
        self.accordion
            .rebuild(&self.grouped, &self.config.accordion.initially_open);
        self.status = ListStatus::Ready;
        log::info!(
            "Catalog ready: {} products in {} sections",
            self.products.len(),
            self.accordion.sections().len()
        );
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn products(&self) -> &[BankingProduct] {
        &self.products
    }

    /// Look up a product by id
    pub fn product(&self, id: &str) -> Result<&BankingProduct, CoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound { id: id.to_string() })
    }

    pub fn grouped(&self) -> &GroupedProducts {
        &self.grouped
    }

    pub fn accordion(&self) -> &ProductAccordion {
        &self.accordion
    }

    pub fn summary(&self) -> CatalogSummary {
        let by_type = self
            .grouped
            .iter()
            .map(|(account_type, bucket)| TypeCount { account_type, count: bucket.len() })
            .collect();

        CatalogSummary {
            status: self.status.clone(),
            total: self.products.len(),
            ungrouped: self.products.len() - self.grouped.total(),
            by_type,
        }
    }

    /// Toggle one section and return its new open state
    pub fn toggle_section(&mut self, id: PanelId) -> Result<bool, CoreError> {
        self.accordion
            .toggle(id)
            .ok_or_else(|| CoreError::PanelNotFound { id: id.to_string() })
    }

    pub fn balance_format(&self) -> BalanceFormat {
        BalanceFormat::from(&self.config.currency)
    }

    /// Build display cards for one section
    pub fn section_view(&self, id: PanelId) -> Result<ProductSection, CoreError> {
        let section = self
            .accordion
            .section(id)
            .ok_or_else(|| CoreError::PanelNotFound { id: id.to_string() })?;
        Ok(self.build_section(section))
    }

    fn build_section(&self, section: &Section) -> ProductSection {
        let format = self.balance_format();
        let currency = &self.config.currency.default_currency;
        ProductSection {
            panel_id: section.panel_id,
            heading: section.heading(),
            is_open: self.accordion.is_open(section.panel_id),
            cards: self
                .grouped
                .bucket(&section.account_type)
                .iter()
                .map(|p| ProductCard::from_product(p, &format, currency))
                .collect(),
        }
    }

    /// What the product list should currently display
    pub fn list_view(&self) -> ProductsListView {
        match &self.status {
            ListStatus::Loading => ProductsListView::Loading,
            ListStatus::Failed(message) => ProductsListView::Error { message: message.clone() },
            ListStatus::Ready if self.accordion.sections().is_empty() => ProductsListView::Empty,
            ListStatus::Ready => ProductsListView::Sections {
                sections: self
                    .accordion
                    .sections()
                    .iter()
                    .map(|s| self.build_section(s))
                    .collect(),
            },
        }
    }
}

impl std::fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCatalog")
            .field("status", &self.status)
            .field("products", &self.products.len())
            .field("accordion", &self.accordion)
            .finish_non_exhaustive()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    const PRODUCTS: &str = r#"[
        {"id": "1", "iban": "DE89370400440532013000", "accountType": "checking", "accountState": "active",
         "balance": 5250.50, "currency": "EUR", "accountName": "Main Account", "lastActivity": "2025-01-15"},
        {"id": "2", "iban": "DE75512108001234567890", "accountType": "savings", "accountState": "active",
         "balance": 25000.00, "currency": "EUR", "accountName": "Emergency Fund"},
        {"id": "3", "iban": "DE12500105170648489890", "accountType": "credit", "accountState": "frozen",
         "balance": -3500.00},
        {"id": "4", "iban": "DE02120300000000202051", "accountType": "checking", "accountState": "inactive"},
        {"id": "5", "iban": "DE02500105170137075030", "accountType": "loan", "accountState": "active"}
    ]"#;

    fn config_for(dir: &Path, file: &str) -> Config {
        let mut config = Config::default();
        config.data.path = dir.to_path_buf();
        config.data.products_file = file.to_string();
        config
    }

    fn catalog_for(config: Config) -> ProductCatalog {
        ProductCatalog::new(config, Arc::new(DefaultProductLoader::default()))
    }

    async fn loaded_catalog() -> (tempfile::TempDir, ProductCatalog) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("products.json"), PRODUCTS).unwrap();
        let mut catalog = catalog_for(config_for(dir.path(), "products.json"));
        catalog.load().await.unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_new_catalog_is_loading() {
        let catalog = catalog_for(Config::default());
        assert_eq!(catalog.status(), &ListStatus::Loading);
        assert_eq!(catalog.list_view(), ProductsListView::Loading);
        assert!(catalog.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_groups_products() {
        let (_dir, catalog) = loaded_catalog().await;

        assert_eq!(catalog.status(), &ListStatus::Ready);
        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.grouped().checking.len(), 2);
        assert_eq!(catalog.grouped().investment.len(), 0);

        let summary = catalog.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.ungrouped, 1);
        assert_eq!(summary.by_type.len(), 4);
    }

    #[tokio::test]
    async fn test_list_view_sections() {
        let (_dir, catalog) = loaded_catalog().await;

        let view = catalog.list_view();
        let headings: Vec<&str> = view.sections().iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Checking (2)", "Savings (1)", "Credit (1)"]);
        assert!(view.sections().iter().all(|s| !s.is_open));

        let credit = &view.sections()[2].cards[0];
        assert_eq!(credit.balance.as_deref(), Some("-3,500.00"));
        assert_eq!(credit.currency, "EUR");
        assert_eq!(credit.state_color, "#3b82f6");
    }

    #[tokio::test]
    async fn test_toggle_section_single_open() {
        let (_dir, mut catalog) = loaded_catalog().await;
        let ids: Vec<PanelId> = catalog.accordion().sections().iter().map(|s| s.panel_id).collect();

        assert!(catalog.toggle_section(ids[0]).unwrap());
        assert!(catalog.toggle_section(ids[1]).unwrap());
        let view = catalog.list_view();
        let open: Vec<bool> = view.sections().iter().map(|s| s.is_open).collect();
        assert_eq!(open, vec![false, true, false]);

        assert!(!catalog.toggle_section(ids[1]).unwrap());
        assert!(catalog.accordion().group().open_ids().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_unknown_section() {
        let (_dir, mut catalog) = loaded_catalog().await;
        let err = catalog.toggle_section(PanelId::from(u64::MAX)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PanelNotFound);
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let (_dir, catalog) = loaded_catalog().await;
        assert_eq!(catalog.product("2").unwrap().account_name.as_deref(), Some("Emergency Fund"));
        assert!(matches!(catalog.product("99"), Err(CoreError::ProductNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = catalog_for(config_for(dir.path(), "products.json"));

        let err = catalog.load().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::LoadError);
        assert!(matches!(catalog.status(), ListStatus::Failed(_)));
        assert!(matches!(catalog.list_view(), ProductsListView::Error { .. }));
    }

    #[tokio::test]
    async fn test_load_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("products.json"), "[]").unwrap();
        let mut catalog = catalog_for(config_for(dir.path(), "products.json"));

        assert_eq!(catalog.load().await.unwrap(), 0);
        assert_eq!(catalog.list_view(), ProductsListView::Empty);
    }

    #[tokio::test]
    async fn test_load_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), r#"[{"id": "1", "iban": "DE89370400440532013000", "accountType": "savings", "accountState": "active"}]"#).unwrap();
        fs::write(dir.path().join("b.yaml"), "- id: \"2\"\n  iban: DE75512108001234567890\n  accountType: investment\n  accountState: closed\n").unwrap();
        let mut catalog = catalog_for(config_for(dir.path(), "*.*"));

        assert_eq!(catalog.load().await.unwrap(), 2);
        assert_eq!(catalog.accordion().sections().len(), 2);
    }

    #[tokio::test]
    async fn test_reload_rebuilds_sections() {
        let (dir, mut catalog) = loaded_catalog().await;
        let old = catalog.accordion().sections()[0].panel_id;
        catalog.toggle_section(old).unwrap();

        fs::write(dir.path().join("products.json"), r#"[{"id": "9", "iban": "DE89370400440532013000", "accountType": "investment", "accountState": "active"}]"#).unwrap();
        assert_eq!(catalog.reload().await.unwrap(), 1);

        assert!(catalog.toggle_section(old).is_err());
        let view = catalog.list_view();
        assert_eq!(view.sections().len(), 1);
        assert_eq!(view.sections()[0].heading, "Investment (1)");
        assert!(!view.sections()[0].is_open);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_products() {
        let (dir, mut catalog) = loaded_catalog().await;
        fs::write(dir.path().join("products.json"), "{not json").unwrap();

        assert!(catalog.reload().await.is_err());
        assert_eq!(catalog.products().len(), 5);
        assert!(matches!(catalog.status(), ListStatus::Failed(_)));
    }

    #[tokio::test]
    async fn test_failed_reload_drops_sections() {
        let (dir, mut catalog) = loaded_catalog().await;
        let old_id = catalog.accordion().sections()[0].panel_id;
        fs::write(dir.path().join("products.json"), "{not json").unwrap();

        assert!(catalog.reload().await.is_err());
        assert!(catalog.accordion().sections().is_empty());
        assert!(matches!(
            catalog.toggle_section(old_id),
            Err(CoreError::PanelNotFound { .. })
        ));
        assert!(catalog.accordion().group().open_ids().is_empty());
        assert!(matches!(catalog.list_view(), ProductsListView::Error { .. }));
    }
}
