//! Bankweb main entry point

use bankweb_api::start_server;
use bankweb_config::{Config, ConfigError};
use bankweb_core::ProductCatalog;
use bankweb_loader::DefaultProductLoader;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "bankweb")]
#[command(author = "Bankweb Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web view of banking products", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).init();
}

fn report_config_error(error: &ConfigError) {
    log::error!("[{}] {}", error.code(), error);
    if let Some(hint) = error.hint() {
        log::error!("  hint: {}", hint);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = if args.config.exists() {
        match Config::load(args.config.clone()) {
            Ok(config) => config,
            Err(e) => {
                init_logging("info");
                report_config_error(&e);
                return Err(e.into());
            }
        }
    } else {
        Config::default()
    };

    init_logging(&config.logging.level);

    if !args.config.exists() {
        log::warn!("Config file not found: {}, using defaults", args.config.display());
    }
    log::info!(
        "Config loaded: data path={}, products_file={}",
        config.data.path.display(),
        config.data.products_file
    );

    let rt = Runtime::new()?;

    rt.block_on(async {
        let loader = Arc::new(DefaultProductLoader::default());
        let mut catalog = ProductCatalog::new(config.clone(), loader);

        match catalog.load().await {
            Ok(count) => log::info!("Loaded {} banking products", count),
            Err(e) => log::error!("Failed to load products: {}", e),
        }

        let catalog = Arc::new(RwLock::new(catalog));
        start_server(config, catalog).await
    })?;

    Ok(())
}
