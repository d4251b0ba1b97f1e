use crate::core::{CatalogSource, Product, ProductId};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_price, validate_unique_ids, Validate};
use serde::Serialize;

/// Fixed, read-only list of purchasable products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog after checking ids are unique, names are filled in
    /// and prices are finite and non-negative.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let catalog = Self::new(source.load_products()?)?;
        tracing::debug!("Loaded catalog with {} products", catalog.len());
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: BuiltinCatalog.products(),
        }
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_unique_ids("products", self.products.iter().map(|p| p.id))?;
        for product in &self.products {
            validate_non_empty_string(&format!("products[{}].name", product.id), &product.name)?;
            validate_price(&format!("products[{}].price", product.id), product.price)?;
        }
        Ok(())
    }
}

/// The three-product catalog the screen ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn products(&self) -> Vec<Product> {
        vec![
            Product::new(1, "Producto 1", 10.0),
            Product::new(2, "Producto 2", 20.0),
            Product::new(3, "Producto 3", 30.0),
        ]
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products())
    }
}
