use anyhow::Context;
use clap::Parser;
use pocket_cart::app::session;
use pocket_cart::core::catalog::BuiltinCatalog;
use pocket_cart::utils::{logger, validation::Validate};
use pocket_cart::{CartStore, Catalog, CatalogFile, CliConfig, Labels, OutputFormat, Screen};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting pocket-cart");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let (catalog, labels) = match &config.catalog {
        Some(path) => {
            tracing::info!("Loading catalog from: {}", path.display());
            CatalogFile::from_file(path)
                .and_then(CatalogFile::into_parts)
                .with_context(|| format!("failed to load catalog '{}'", path.display()))?
        }
        None => (Catalog::load(&BuiltinCatalog)?, Labels::default()),
    };
    tracing::info!("Catalog ready with {} products", catalog.len());

    let mut screen = Screen::new(catalog, labels, CartStore::new(), config.format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = session::run(&mut screen, stdin.lock(), &mut stdout.lock())?;

    tracing::debug!(?summary, "Leaving pocket-cart");
    Ok(())
}
