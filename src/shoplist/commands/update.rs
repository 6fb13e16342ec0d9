use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::{Result, ShoplistError};
use crate::manager::ItemManager;
use crate::model::ShoppingItem;

use super::helpers::resolve_position;

pub fn run(manager: &mut ItemManager, position: usize, update: ItemUpdate) -> Result<CmdResult> {
    if update.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to change"));
        return Ok(result);
    }

    let index = resolve_position(manager, position)?;
    let current = manager.get(index).cloned().unwrap_or_default();

    if let Some(description) = &update.description {
        if description.is_empty() {
            return Err(ShoplistError::Input(
                "Description must not be empty".to_string(),
            ));
        }
    }
    if let Some(amount) = update.amount {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ShoplistError::Input(format!(
                "Amount must be a non-negative number, got {}",
                amount
            )));
        }
    }

    let item = ShoppingItem::new(
        update.description.as_deref().unwrap_or(current.description()),
        update.amount.unwrap_or(current.amount()),
        update.unit.unwrap_or(current.unit()),
    );
    manager.update(&item, index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Changed ({}): {}",
        position,
        item.description()
    )));
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Unit;

    fn seeded_manager() -> ItemManager {
        let mut manager = ItemManager::new();
        add::run(&mut manager, "Bread".into(), 2.0, Unit::Piece).unwrap();
        add::run(&mut manager, "Milk".into(), 1.0, Unit::Liter).unwrap();
        manager
    }

    #[test]
    fn replaces_only_supplied_fields() {
        let mut manager = seeded_manager();
        let update = ItemUpdate {
            amount: Some(3.0),
            ..ItemUpdate::default()
        };
        run(&mut manager, 1, update).unwrap();

        let item = manager.get(0).unwrap();
        assert_eq!(item.description(), "Bread");
        assert_eq!(item.amount(), 3.0);
        assert_eq!(item.unit(), Unit::Piece);
    }

    #[test]
    fn replaces_all_fields() {
        let mut manager = seeded_manager();
        let update = ItemUpdate {
            description: Some("Rye bread".into()),
            amount: Some(1.0),
            unit: Some(Unit::Kg),
        };
        run(&mut manager, 1, update).unwrap();

        let item = manager.get(0).unwrap();
        assert_eq!(item.description(), "Rye bread");
        assert_eq!(item.unit(), Unit::Kg);
        // Length and order are preserved
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(1).unwrap().description(), "Milk");
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut manager = seeded_manager();
        let result = run(&mut manager, 1, ItemUpdate::default()).unwrap();
        assert!(result.affected_items.is_empty());
        assert_eq!(manager.get(0).unwrap().description(), "Bread");
    }

    #[test]
    fn fails_for_unknown_position() {
        let mut manager = seeded_manager();
        let update = ItemUpdate {
            amount: Some(3.0),
            ..ItemUpdate::default()
        };
        let err = run(&mut manager, 3, update);
        assert!(matches!(err, Err(ShoplistError::Selection(_))));
        assert_eq!(manager.get(0).unwrap().amount(), 2.0);
    }

    #[test]
    fn rejects_invalid_field_values() {
        let mut manager = seeded_manager();
        let update = ItemUpdate {
            description: Some("".into()),
            ..ItemUpdate::default()
        };
        assert!(run(&mut manager, 1, update).is_err());

        let update = ItemUpdate {
            amount: Some(-1.0),
            ..ItemUpdate::default()
        };
        assert!(run(&mut manager, 1, update).is_err());
        assert_eq!(manager.get(0).unwrap().amount(), 2.0);
    }
}
