pub mod catalog;
pub mod store;

pub use crate::domain::model::{Cart, CartEvent, CartLine, Product, ProductId};
pub use crate::domain::ports::{CartObserver, CatalogSource};
pub use crate::utils::error::Result;
