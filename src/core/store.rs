use crate::core::{Cart, CartEvent, CartObserver, Product, ProductId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the current [`Cart`] and tells subscribers about every change.
///
/// Mutations compute the next snapshot with the pure transitions on `Cart`,
/// swap it in, and only then notify observers in registration order. There
/// is no error path: adding always succeeds and removing an id that is not
/// in the cart leaves the content as it was.
pub struct CartStore {
    cart: Cart,
    observers: Vec<(SubscriptionId, Box<dyn CartObserver>)>,
    next_subscription: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_cart(Cart::new())
    }

    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: Product) {
        let product_id = product.id;
        self.cart = self.cart.with_added(product);

        let quantity = self.cart.quantity_of(product_id);
        tracing::debug!(product_id, quantity, "Added product to cart");
        self.publish(CartEvent::Added {
            product_id,
            quantity,
        });
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        let existed = self.cart.contains(id);
        self.cart = self.cart.without(id);

        if existed {
            tracing::debug!(product_id = id, "Removed product from cart");
        } else {
            tracing::debug!(product_id = id, "Product not in cart, nothing removed");
        }
        self.publish(CartEvent::Removed {
            product_id: id,
            existed,
        });
    }

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: CartObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when the id was never issued or is already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn publish(&mut self, event: CartEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_cart_changed(&event, &self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_sees_new_snapshot() {
        let mut store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event: &CartEvent, cart: &Cart| {
            sink.borrow_mut().push((*event, cart.total_quantity()));
        });

        store.add_to_cart(Product::new(7, "X", 1.0));
        store.add_to_cart(Product::new(7, "X", 1.0));
        store.remove_from_cart(7);

        assert_eq!(
            *seen.borrow(),
            vec![
                (CartEvent::Added { product_id: 7, quantity: 1 }, 1),
                (CartEvent::Added { product_id: 7, quantity: 2 }, 2),
                (CartEvent::Removed { product_id: 7, existed: true }, 0),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &CartEvent, _: &Cart| *counter.borrow_mut() += 1);

        store.add_to_cart(Product::new(1, "A", 10.0));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_to_cart(Product::new(1, "A", 10.0));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(store.cart().quantity_of(1), 2);
    }
}
