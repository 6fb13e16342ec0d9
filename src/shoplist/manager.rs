//! The collection manager: the single owner of the shopping list.
//!
//! `ItemManager` holds the ordered sequence of items and is the only
//! component allowed to mutate it. Callers receive clones or shared
//! references, never mutable aliases into the backing store. Every
//! position-addressed operation applies the same bounds predicate,
//! `index < count()`; `usize` makes negative indexes unrepresentable.

use crate::model::ShoppingItem;

/// Ordered, index-addressed collection of shopping items.
#[derive(Debug, Default)]
pub struct ItemManager {
    items: Vec<ShoppingItem>,
}

impl ItemManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently on the list.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// The item at `index`, or `None` when the index is out of range.
    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    /// Append an item to the end of the list and return its index.
    pub fn add(&mut self, item: ShoppingItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Overwrite the fields of the item at `index` with those of `item`.
    ///
    /// This is a field-by-field copy through the stored item's setters,
    /// not a replacement of the stored entry, so the invalid-value
    /// contract of each setter still applies. Returns `false` and mutates
    /// nothing when `index` is out of range.
    pub fn update(&mut self, item: &ShoppingItem, index: usize) -> bool {
        if !self.check_index(index) {
            return false;
        }
        let current = &mut self.items[index];
        current.set_description(item.description());
        current.set_amount(item.amount());
        current.set_unit(item.unit());
        true
    }

    /// Remove and return the item at `index`, shifting later items left.
    /// Returns `None` and mutates nothing when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<ShoppingItem> {
        if !self.check_index(index) {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    /// The fixed-width list line of every item, in list order.
    pub fn display_strings(&self) -> Vec<String> {
        self.items.iter().map(|i| i.display_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    fn bread() -> ShoppingItem {
        ShoppingItem::new("Bread", 2.0, Unit::Piece)
    }

    fn milk() -> ShoppingItem {
        ShoppingItem::new("Milk", 1.0, Unit::Liter)
    }

    #[test]
    fn starts_empty() {
        let manager = ItemManager::new();
        assert_eq!(manager.count(), 0);
        assert!(manager.is_empty());
        assert!(manager.display_strings().is_empty());
    }

    #[test]
    fn add_appends_and_returns_index() {
        let mut manager = ItemManager::new();
        assert_eq!(manager.add(bread()), 0);
        assert_eq!(manager.add(milk()), 1);
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(1).unwrap().description(), "Milk");
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut manager = ItemManager::new();
        assert!(manager.get(0).is_none());
        manager.add(bread());
        assert!(manager.get(1).is_none());
        assert!(manager.get(usize::MAX).is_none());
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        manager.add(bread());
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn update_copies_fields_in_place() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        manager.add(milk());

        let replacement = ShoppingItem::new("Rye bread", 1.0, Unit::Kg);
        assert!(manager.update(&replacement, 0));

        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(0).unwrap(), &replacement);
        assert_eq!(manager.get(1).unwrap().description(), "Milk");
    }

    #[test]
    fn update_out_of_range_fails() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        let replacement = milk();
        assert!(!manager.update(&replacement, 1));
        assert_eq!(manager.get(0).unwrap().description(), "Bread");
    }

    #[test]
    fn update_on_empty_list_fails() {
        let mut manager = ItemManager::new();
        assert!(!manager.update(&bread(), 0));
    }

    #[test]
    fn remove_shifts_later_items_left() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        manager.add(milk());
        manager.add(ShoppingItem::new("Eggs", 12.0, Unit::Piece));

        let removed = manager.remove(1).unwrap();
        assert_eq!(removed.description(), "Milk");
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(0).unwrap().description(), "Bread");
        assert_eq!(manager.get(1).unwrap().description(), "Eggs");
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        assert!(manager.remove(1).is_none());
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn display_strings_preserve_insertion_order() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        manager.add(milk());

        let lines = manager.display_strings();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Bread"));
        assert!(lines[1].starts_with("Milk"));
    }

    #[test]
    fn display_string_of_single_item_is_exact() {
        let mut manager = ItemManager::new();
        manager.add(bread());
        let expected = format!("Bread{}2.00 piece ", " ".repeat(43));
        assert_eq!(manager.display_strings(), vec![expected]);
    }
}
