use crate::domain::model::{Cart, CartEvent, Product};
use crate::utils::error::Result;

/// Anything that wants to hear about cart changes. Called synchronously by
/// the store after each mutation, with the new snapshot already in place.
pub trait CartObserver {
    fn on_cart_changed(&mut self, event: &CartEvent, cart: &Cart);
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent, &Cart),
{
    fn on_cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        self(event, cart)
    }
}

/// Where the product list comes from (built-in defaults, a TOML file, ...).
pub trait CatalogSource {
    fn load_products(&self) -> Result<Vec<Product>>;
}
