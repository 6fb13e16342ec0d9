use crate::commands::CmdResult;
use crate::error::Result;
use crate::manager::ItemManager;

pub fn run(manager: &ItemManager) -> Result<CmdResult> {
    let items = manager.iter().cloned().collect();
    let lines = manager.display_strings();
    Ok(CmdResult::default()
        .with_listed_items(items)
        .with_lines(lines))
}
