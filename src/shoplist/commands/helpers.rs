use crate::error::{Result, ShoplistError};
use crate::manager::ItemManager;

/// Map a user-facing 1-based position to the manager's 0-based index,
/// failing when nothing is listed at that position.
pub fn resolve_position(manager: &ItemManager, position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .filter(|&index| index < manager.count())
        .ok_or_else(|| {
            ShoplistError::Selection(format!(
                "No item at position {} (the list has {} item(s))",
                position,
                manager.count()
            ))
        })
}
