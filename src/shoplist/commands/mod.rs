use crate::model::{ShoppingItem, Unit};

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, free of any presentation concerns.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<ShoppingItem>,
    pub listed_items: Vec<ShoppingItem>,
    pub lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<ShoppingItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<ShoppingItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }
}

/// A partial edit of one item: only the supplied fields are replaced.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<Unit>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.unit.is_none()
    }
}
