//! Client-side Cart
//!
//! Lives only in the browser until the customer places an order.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::menu::MenuItem;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: u32,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

impl Entity for CartLine {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.menu_item_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`. An item already in the cart gets its quantity bumped.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                menu_item_id: item.id,
                title: item.title.clone(),
                unit_price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Set a line's quantity. Anything below 1 removes the line.
    pub fn set_quantity(&mut self, menu_item_id: u32, quantity: i64) {
        if quantity < 1 {
            self.remove(menu_item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Change a line's quantity by `delta`
    pub fn adjust(&mut self, menu_item_id: u32, delta: i64) {
        if let Some(current) = self.quantity_of(menu_item_id) {
            self.set_quantity(menu_item_id, i64::from(current) + delta);
        }
    }

    pub fn remove(&mut self, menu_item_id: u32) {
        super::entity::remove_by_id(&mut self.lines, menu_item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity_of(&self, menu_item_id: u32) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.menu_item_id == menu_item_id)
            .map(|l| l.quantity)
    }

    /// Number of units across all lines (navbar badge)
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, cents: i64) -> MenuItem {
        MenuItem {
            id,
            title: format!("Dish {}", id),
            price: Money::from_cents(cents),
            category: None,
            featured: false,
            image: None,
        }
    }

    #[test]
    fn test_add_increments_existing_line() {
        let mut cart = Cart::new();
        let pizza = make_item(1, 1200);
        cart.add(&pizza);
        cart.add(&pizza);
        cart.add(&make_item(2, 300));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_is_exact() {
        let mut cart = Cart::new();
        cart.add(&make_item(1, 1999));
        cart.add(&make_item(2, 1));
        cart.set_quantity(1, 3);
        assert_eq!(cart.total(), Money::from_cents(1999 * 3 + 1));
    }

    #[test]
    fn test_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add(&make_item(1, 500));
        cart.add(&make_item(2, 500));

        cart.adjust(1, -1);
        assert_eq!(cart.quantity_of(1), None);

        cart.set_quantity(2, -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&make_item(1, 500));
        cart.set_quantity(9, 4);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(9), None);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&make_item(1, 500));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }
}
