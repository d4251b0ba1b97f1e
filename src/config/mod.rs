pub mod catalog_file;

#[cfg(feature = "cli")]
use crate::app::screen::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::{CartError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pocket-cart")]
#[command(about = "A single-screen shopping cart for the terminal")]
pub struct CliConfig {
    /// TOML file with products and optional labels; the built-in catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// How frames are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            let is_toml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
            if !is_toml {
                return Err(CartError::InvalidValue {
                    field: "catalog".to_string(),
                    value: path.display().to_string(),
                    reason: "Catalog file must have a .toml extension".to_string(),
                });
            }
        }
        Ok(())
    }
}
