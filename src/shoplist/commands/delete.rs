use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoplistError};
use crate::manager::ItemManager;

use super::helpers::resolve_position;

pub fn run(manager: &mut ItemManager, position: usize) -> Result<CmdResult> {
    let index = resolve_position(manager, position)?;
    let removed = manager.remove(index).ok_or_else(|| {
        ShoplistError::Selection(format!("No item at position {}", position))
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed ({}): {}",
        position,
        removed.description()
    )));
    Ok(result.with_affected_items(vec![removed]))
}
