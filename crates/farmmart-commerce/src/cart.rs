//! Shopping cart and line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat shipping charge applied to every non-empty order, in minor units.
pub const FLAT_SHIPPING_CENTS: i64 = 500;

/// A line in the cart: a product plus a quantity of at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Quantity, always >= 1 while the item is in the cart.
    pub quantity: i64,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// A session shopping cart.
///
/// Items keep insertion order for display. No two items share a product
/// id, and a quantity dropping to zero or below removes the item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented
    /// by one; otherwise a new line is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Remove a product's line entirely. No-op if the product is absent.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        self.items.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or below removes the line, same as [`Cart::remove`].
    /// Returns whether a line was changed or removed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Total price of the cart, recomputed from the current items.
    pub fn total(&self) -> Money {
        let currency = self.currency();
        self.items.iter().fold(Money::zero(currency), |acc, item| {
            Money::new(
                acc.amount_cents.saturating_add(item.line_total().amount_cents),
                currency,
            )
        })
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    /// Empty the cart. Used after checkout completes.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Order summary with the flat shipping line.
    pub fn summary(&self) -> CartSummary {
        let subtotal = self.total();
        let shipping = if self.is_empty() {
            Money::zero(subtotal.currency)
        } else {
            Money::new(FLAT_SHIPPING_CENTS, subtotal.currency)
        };
        let total = Money::new(
            subtotal.amount_cents + shipping.amount_cents,
            subtotal.currency,
        );
        CartSummary {
            subtotal,
            shipping,
            total,
        }
    }

    /// The cart's currency: that of its first item, or the store default.
    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.product.price.currency)
            .unwrap_or_default()
    }
}

/// Order summary shown at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Flat shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}
