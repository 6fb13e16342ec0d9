use crate::commands::CmdResult;
use crate::error::Result;
use crate::manager::ItemManager;

use super::helpers::resolve_position;

pub fn run(manager: &ItemManager, position: usize) -> Result<CmdResult> {
    let index = resolve_position(manager, position)?;
    // resolve_position already applied the bounds predicate
    let item = manager.get(index).cloned().unwrap_or_default();
    let line = item.display_string();
    Ok(CmdResult::default()
        .with_listed_items(vec![item])
        .with_lines(vec![line]))
}
