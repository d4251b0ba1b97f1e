use crate::app::screen::Labels;
use crate::core::catalog::Catalog;
use crate::core::{CatalogSource, Product};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// On-disk catalog: a `[labels]` table and a `[[products]]` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read catalog file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let file: CatalogFile = toml::from_str(&processed)?;
        file.validate()?;
        Ok(file)
    }

    /// Splits the file into its labels and the catalog. Products are
    /// validated here, once, by loading them into a [`Catalog`].
    pub fn into_parts(self) -> Result<(Catalog, Labels)> {
        let catalog = Catalog::load(&self)?;
        Ok((catalog, self.labels))
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        self.labels.validate()
    }
}

impl CatalogSource for CatalogFile {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

/// Replaces `${NAME}` with the environment value; unset names stay as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| format!("${{{}}}", name))
        })
        .into_owned()
}
