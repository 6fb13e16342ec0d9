//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! shoplist operations, regardless of the shell driving them. It owns the
//! [`ItemManager`] — no other component holds list state — dispatches to
//! the command functions, and returns structured `Result<CmdResult>`
//! values. It never formats output or touches the terminal; that is the
//! shell's job.

use crate::commands;
use crate::error::Result;
use crate::manager::ItemManager;
use crate::model::Unit;

/// The main API facade for shoplist operations.
///
/// All shell clients (the interactive terminal client, tests, anything
/// else) should interact through this API.
#[derive(Debug, Default)]
pub struct ShoplistApi {
    manager: ItemManager,
}

impl ShoplistApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(
        &mut self,
        description: String,
        amount: f64,
        unit: Unit,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.manager, description, amount, unit)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.manager)
    }

    pub fn show_item(&self, position: usize) -> Result<commands::CmdResult> {
        commands::show::run(&self.manager, position)
    }

    pub fn update_item(
        &mut self,
        position: usize,
        update: commands::ItemUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.manager, position, update)
    }

    pub fn delete_item(&mut self, position: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.manager, position)
    }

    pub fn count(&self) -> usize {
        self.manager.count()
    }
}

pub use commands::{CmdMessage, CmdResult, ItemUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_through_the_facade() {
        let mut api = ShoplistApi::new();
        api.add_item("Bread".into(), 2.0, Unit::Piece).unwrap();
        assert_eq!(api.count(), 1);

        let listed = api.list_items().unwrap();
        assert_eq!(listed.lines.len(), 1);

        api.delete_item(1).unwrap();
        assert_eq!(api.count(), 0);
    }
}
