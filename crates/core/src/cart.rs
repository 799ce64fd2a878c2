//! Cart

use std::num::NonZeroU32;

use crate::{
    catalog::{CatalogItem, CatalogItemUuid},
    orders::OrderSnapshot,
};

/// A catalog item together with how many of it the customer wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: CatalogItem,
    quantity: NonZeroU32,
}

impl CartLine {
    /// Create a new line for the given item.
    pub fn new(item: CatalogItem, quantity: NonZeroU32) -> Self {
        Self { item, quantity }
    }

    /// The item copy captured when the line was created.
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> u64 {
        self.item
            .price
            .saturating_mul(u64::from(self.quantity.get()))
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now has the requested quantity.
    Updated,

    /// The requested quantity was zero, so the line was dropped.
    Removed,

    /// No line exists for the item; nothing changed.
    NotFound,
}

impl QuantityUpdate {
    /// Whether the cart changed, i.e. derived views need refreshing.
    pub fn is_applied(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// The customer's in-progress selection, at most one line per catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from existing lines, merging lines that share an item.
    pub fn with_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();

        for line in lines {
            cart.add_quantity(line.item, line.quantity);
        }

        cart
    }

    /// Add one of `item`, merging into an existing line when there is one.
    ///
    /// Returns the line's quantity after the merge.
    pub fn add(&mut self, item: CatalogItem) -> u32 {
        self.add_quantity(item, NonZeroU32::MIN)
    }

    fn add_quantity(&mut self, item: CatalogItem, quantity: NonZeroU32) -> u32 {
        if let Some(line) = self.line_mut(item.uuid) {
            line.quantity = line.quantity.saturating_add(quantity.get());

            return line.quantity.get();
        }

        self.lines.push(CartLine::new(item, quantity));

        quantity.get()
    }

    /// Replace the quantity of an existing line; zero removes the line.
    pub fn set_quantity(&mut self, uuid: CatalogItemUuid, quantity: u32) -> QuantityUpdate {
        let Some(index) = self.position(uuid) else {
            return QuantityUpdate::NotFound;
        };

        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.lines.remove(index);

            return QuantityUpdate::Removed;
        };

        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity;
        }

        QuantityUpdate::Updated
    }

    /// Copy of the current lines, in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// The line for the given item, if any.
    pub fn line(&self, uuid: CatalogItemUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.uuid == uuid)
    }

    /// Sum of every line total, recomputed on each call.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.line_total()))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Remove the quantities captured in a submitted snapshot.
    ///
    /// Lines added after the snapshot was taken survive; with no changes in
    /// between this empties the cart. Settling is by item, not by line: an
    /// item that was removed and added again after the snapshot loses the
    /// captured quantity from its new line.
    pub fn settle(&mut self, snapshot: &OrderSnapshot) {
        for captured in &snapshot.lines {
            let Some(index) = self.position(captured.item) else {
                continue;
            };

            let remaining = self
                .lines
                .get(index)
                .map_or(0, |line| line.quantity().saturating_sub(captured.quantity));

            self.set_quantity(captured.item, remaining);
        }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, uuid: CatalogItemUuid) -> Option<usize> {
        self.lines.iter().position(|line| line.item.uuid == uuid)
    }

    fn line_mut(&mut self, uuid: CatalogItemUuid) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item.uuid == uuid)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;

    fn item(title: &str, price: u64) -> CatalogItem {
        CatalogItem {
            uuid: CatalogItemUuid::new(),
            title: title.to_string(),
            description: String::new(),
            image_url: String::new(),
            price,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let a = item("Americano", 4_000);
        let b = item("Brownie", 2_500);
        let mut cart = Cart::new();

        for next in [&a, &b, &a, &a, &b] {
            cart.add(next.clone());
        }

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(a.uuid).map(CartLine::quantity), Some(3));
        assert_eq!(cart.line(b.uuid).map(CartLine::quantity), Some(2));
    }

    #[test]
    fn add_returns_merged_quantity() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();

        assert_eq!(cart.add(a.clone()), 1);
        assert_eq!(cart.add(a), 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let a = item("Americano", 4_000);
        let b = item("Brownie", 2_500);
        let mut cart = Cart::new();

        cart.add(b.clone());
        cart.add(a.clone());
        cart.add(b.clone());

        let order: Vec<_> = cart.lines().iter().map(|line| line.item().uuid).collect();

        assert_eq!(order, [b.uuid, a.uuid]);
    }

    #[test]
    fn set_quantity_replaces_quantity() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();
        cart.add(a.clone());

        assert_eq!(cart.set_quantity(a.uuid, 5), QuantityUpdate::Updated);
        assert_eq!(cart.line(a.uuid).map(CartLine::quantity), Some(5));
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();
        cart.add(a.clone());

        assert_eq!(cart.set_quantity(a.uuid, 0), QuantityUpdate::Removed);
        assert!(cart.line(a.uuid).is_none(), "line should be gone");
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn set_quantity_on_missing_line_is_a_no_op() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();
        cart.add(a);

        let before = cart.lines();
        let outcome = cart.set_quantity(CatalogItemUuid::new(), 3);

        assert_eq!(outcome, QuantityUpdate::NotFound);
        assert!(!outcome.is_applied());
        assert_eq!(cart.lines(), before);
    }

    #[test]
    fn total_tracks_every_mutation() {
        let a = item("Americano", 4_000);
        let b = item("Brownie", 2_500);
        let mut cart = Cart::new();

        let expected = |cart: &Cart| -> u64 { cart.lines().iter().map(CartLine::line_total).sum() };

        cart.add(a.clone());
        assert_eq!(cart.total(), expected(&cart));

        cart.add(b.clone());
        cart.add(a.clone());
        assert_eq!(cart.total(), 10_500);
        assert_eq!(cart.total(), expected(&cart));

        cart.set_quantity(b.uuid, 4);
        assert_eq!(cart.total(), 18_000);
        assert_eq!(cart.total(), expected(&cart));

        cart.set_quantity(a.uuid, 0);
        assert_eq!(cart.total(), 10_000);
        assert_eq!(cart.total(), expected(&cart));
    }

    #[test]
    fn quantity_walkthrough() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();

        cart.add(a.clone());
        cart.add(a.clone());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 8_000);

        cart.set_quantity(a.uuid, 5);
        assert_eq!(cart.total(), 20_000);

        cart.set_quantity(a.uuid, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn returned_lines_are_copies() {
        let a = item("Americano", 4_000);
        let mut cart = Cart::new();
        cart.add(a.clone());

        let mut lines = cart.lines();
        lines.clear();

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(item("Americano", 4_000));
        cart.add(item("Brownie", 2_500));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn with_lines_merges_duplicates() -> TestResult {
        let a = item("Americano", 4_000);
        let two = NonZeroU32::new(2).ok_or("two is non-zero")?;

        let cart = Cart::with_lines([
            CartLine::new(a.clone(), NonZeroU32::MIN),
            CartLine::new(a.clone(), two),
        ]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(a.uuid).map(CartLine::quantity), Some(3));

        Ok(())
    }

    #[test]
    fn settle_removes_captured_quantities() -> TestResult {
        let a = item("Americano", 4_000);
        let b = item("Brownie", 2_500);
        let mut cart = Cart::new();
        cart.add(a.clone());
        cart.add(a.clone());

        let snapshot = OrderSnapshot::capture(&cart, Timestamp::now())?;

        cart.add(a.clone());
        cart.add(b.clone());
        cart.settle(&snapshot);

        assert_eq!(cart.line(a.uuid).map(CartLine::quantity), Some(1));
        assert_eq!(cart.line(b.uuid).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn settle_without_changes_empties_the_cart() -> TestResult {
        let mut cart = Cart::new();
        cart.add(item("Americano", 1_000));
        cart.add(item("Brownie", 2_500));

        let snapshot = OrderSnapshot::capture(&cart, Timestamp::now())?;
        cart.settle(&snapshot);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn settle_charges_a_re_added_item_against_its_new_line() -> TestResult {
        let a = item("Americano", 1_000);
        let mut cart = Cart::new();
        cart.add(a.clone());
        cart.add(a.clone());

        let snapshot = OrderSnapshot::capture(&cart, Timestamp::now())?;

        cart.set_quantity(a.uuid, 0);
        cart.add(a.clone());
        cart.add(a.clone());
        cart.add(a.clone());
        cart.settle(&snapshot);

        assert_eq!(cart.line(a.uuid).map(CartLine::quantity), Some(1));

        cart.set_quantity(a.uuid, 0);
        cart.add(a.clone());
        cart.settle(&snapshot);

        assert!(cart.is_empty());

        Ok(())
    }
}
