pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::screen::{Labels, OutputFormat, Reply, Screen};
pub use config::catalog_file::CatalogFile;
pub use crate::core::{catalog::Catalog, store::CartStore};
pub use domain::model::{Cart, CartEvent, CartLine, Product, ProductId};
pub use utils::error::{CartError, Result};
