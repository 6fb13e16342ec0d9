use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoplistError};
use crate::manager::ItemManager;
use crate::model::{ShoppingItem, Unit};

pub fn run(
    manager: &mut ItemManager,
    description: String,
    amount: f64,
    unit: Unit,
) -> Result<CmdResult> {
    if description.is_empty() {
        return Err(ShoplistError::Input(
            "Description must not be empty".to_string(),
        ));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ShoplistError::Input(format!(
            "Amount must be a non-negative number, got {}",
            amount
        )));
    }

    let item = ShoppingItem::new(&description, amount, unit);
    let index = manager.add(item.clone());

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {}",
        index + 1,
        description
    )));
    Ok(result)
}
