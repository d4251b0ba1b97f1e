use crate::utils::error::CartError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    fn first(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

/// Ordered, id-unique list of cart lines.
///
/// A `Cart` is a value: the transitions below never touch `self` and hand
/// back the next snapshot instead. Lines keep the order in which their
/// product was first added and every quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the quantity of the line for `product.id` in place, or appends a
    /// fresh line with quantity 1 when there is none.
    pub fn with_added(&self, product: Product) -> Cart {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => lines.push(CartLine::first(product)),
        }
        Cart { lines }
    }

    /// Drops every line for `id`. Absent ids leave the content unchanged.
    pub fn without(&self, id: ProductId) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter(|line| line.product.id != id)
            .cloned()
            .collect();
        Cart { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |line| line.quantity)
    }

    /// Number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for line in &lines {
            if line.quantity == 0 {
                return Err(CartError::InvalidValue {
                    field: "quantity".to_string(),
                    value: line.quantity.to_string(),
                    reason: format!("line for product {} must have quantity >= 1", line.product.id),
                });
            }
            if !seen.insert(line.product.id) {
                return Err(CartError::InvalidValue {
                    field: "product.id".to_string(),
                    value: line.product.id.to_string(),
                    reason: "duplicate cart line".to_string(),
                });
            }
        }
        Ok(Cart { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// What a store mutation did, handed to observers together with the new cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    Added { product_id: ProductId, quantity: u32 },
    Removed { product_id: ProductId, existed: bool },
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match *self {
            CartEvent::Added { product_id, .. } | CartEvent::Removed { product_id, .. } => {
                product_id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product::new(1, "A", 10.0)
    }

    fn banana() -> Product {
        Product::new(2, "B", 20.0)
    }

    #[test]
    fn test_with_added_appends_new_line() {
        let cart = Cart::new().with_added(apple()).with_added(banana());
        let ids: Vec<ProductId> = cart.lines().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.quantity_of(2), 1);
    }

    #[test]
    fn test_with_added_increments_in_place() {
        let cart = Cart::new()
            .with_added(apple())
            .with_added(banana())
            .with_added(apple());
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product_id(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_transitions_leave_source_snapshot_alone() {
        let before = Cart::new().with_added(apple());
        let after = before.with_added(apple()).without(2);
        assert_eq!(before.quantity_of(1), 1);
        assert_eq!(after.quantity_of(1), 2);
    }

    #[test]
    fn test_without_missing_id_is_unchanged() {
        let cart = Cart::new().with_added(apple());
        assert_eq!(cart.without(42), cart);
        assert!(Cart::new().without(1).is_empty());
    }

    #[test]
    fn test_quantity_saturates() {
        let cart = Cart::try_from(vec![CartLine {
            product: apple(),
            quantity: u32::MAX,
        }])
        .unwrap();
        assert_eq!(cart.with_added(apple()).quantity_of(1), u32::MAX);
    }

    #[test]
    fn test_deserialize_rejects_broken_carts() {
        let duplicate = r#"[
            {"product": {"id": 1, "name": "A", "price": 10.0}, "quantity": 1},
            {"product": {"id": 1, "name": "A", "price": 10.0}, "quantity": 2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(duplicate).is_err());

        let zero = r#"[{"product": {"id": 1, "name": "A", "price": 10.0}, "quantity": 0}]"#;
        assert!(serde_json::from_str::<Cart>(zero).is_err());

        let ok = r#"[{"product": {"id": 1, "name": "A", "price": 10.0}, "quantity": 3}]"#;
        let cart: Cart = serde_json::from_str(ok).unwrap();
        assert_eq!(cart.quantity_of(1), 3);
    }
}
