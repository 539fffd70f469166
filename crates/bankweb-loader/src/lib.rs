//! Banking product loader
//!
//! Reads product records from JSON or YAML files and validates them at
//! ingestion, so the core only ever sees well-formed products.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::LoadError;
pub use parser::SimpleProductParser;
pub use types::{AccountState, AccountType, BankingProduct, ProductFormat};

// ==================== Loader Trait ====================

/// Loader reference type
pub type LoaderRef = Arc<dyn ProductLoaderTrait>;

/// Trait for product loaders
#[async_trait]
pub trait ProductLoaderTrait: Send + Sync {
    /// Parse product records from text
    async fn parse(&self, content: &str, format: ProductFormat) -> Result<Vec<BankingProduct>, LoadError>;

    /// Load products from a single file, format chosen by extension
    async fn load_file(&self, path: PathBuf) -> Result<Vec<BankingProduct>, LoadError>;

    /// Load products from every file matching a glob pattern under `base_dir`
    async fn load_pattern(&self, base_dir: PathBuf, pattern: &str) -> Result<Vec<BankingProduct>, LoadError>;
}

/// Default loader implementation
#[derive(Debug, Default)]
pub struct DefaultProductLoader;

fn format_for(path: &Path) -> Result<ProductFormat, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    ProductFormat::from_extension(ext).ok_or_else(|| LoadError::UnsupportedFormat {
        extension: ext.to_string(),
    })
}

#[async_trait]
impl ProductLoaderTrait for DefaultProductLoader {
    async fn parse(&self, content: &str, format: ProductFormat) -> Result<Vec<BankingProduct>, LoadError> {
        SimpleProductParser::parse(content, format)
    }

    async fn load_file(&self, path: PathBuf) -> Result<Vec<BankingProduct>, LoadError> {
        let format = format_for(&path)?;
        let content = tokio::fs::read_to_string(&path).await?;
        let source = path.to_string_lossy().to_string();

        SimpleProductParser::parse_with_source(&content, format, Some(&source))
    }

    async fn load_pattern(&self, base_dir: PathBuf, pattern: &str) -> Result<Vec<BankingProduct>, LoadError> {
        let full = base_dir.join(pattern);
        let full_str = full.to_string_lossy().to_string();

        let mut paths = Vec::new();
        for path in glob::glob(&full_str)
            .map_err(|_| LoadError::InvalidPattern { pattern: full_str.clone() })?
            .flatten()
            .filter(|p| p.is_file())
        {
            if format_for(&path).is_ok() {
                paths.push(path);
            } else {
                log::warn!("Skipping {}: not a product file", path.display());
            }
        }
        paths.sort();

        let mut products = Vec::new();
        for path in paths {
            log::debug!("Loading products from {}", path.display());
            products.extend(self.load_file(path).await?);
        }

        // Ids must be unique across all matched files
        validation::check_unique_ids(&products)?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CHECKING: &str = r#"[{"id": "1", "iban": "DE89370400440532013000", "accountType": "checking", "accountState": "active"}]"#;
    const SAVINGS: &str = "- id: \"2\"\n  iban: DE75512108001234567890\n  accountType: savings\n  accountState: inactive\n";

    #[tokio::test]
    async fn test_load_file_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, CHECKING).unwrap();

        let products = DefaultProductLoader.load_file(path).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
    }

    #[tokio::test]
    async fn test_load_file_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(&path, "id,iban").unwrap();

        let err = DefaultProductLoader.load_file(path).await.unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_load_file_missing() {
        let err = DefaultProductLoader
            .load_file(PathBuf::from("/nonexistent/products.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::IoError(_)));
    }

    #[tokio::test]
    async fn test_load_pattern_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-savings.yaml"), SAVINGS).unwrap();
        fs::write(dir.path().join("a-checking.json"), CHECKING).unwrap();

        let products = DefaultProductLoader
            .load_pattern(dir.path().to_path_buf(), "*.*")
            .await
            .unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(products[1].account_state, AccountState::Inactive);
    }

    #[tokio::test]
    async fn test_load_pattern_skips_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a-checking.json"), CHECKING).unwrap();
        fs::write(dir.path().join("README.md"), "# Product data").unwrap();
        fs::write(dir.path().join("notes.txt"), "not products").unwrap();

        let products = DefaultProductLoader
            .load_pattern(dir.path().to_path_buf(), "*.*")
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
    }

    #[tokio::test]
    async fn test_load_pattern_duplicate_across_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), CHECKING).unwrap();
        fs::write(dir.path().join("b.json"), CHECKING).unwrap();

        let err = DefaultProductLoader
            .load_pattern(dir.path().to_path_buf(), "*.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId { .. }));
    }

    #[tokio::test]
    async fn test_load_pattern_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let products = DefaultProductLoader
            .load_pattern(dir.path().to_path_buf(), "*.json")
            .await
            .unwrap();
        assert!(products.is_empty());
    }
}
