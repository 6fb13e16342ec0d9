use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShoplistError>;

#[derive(Debug, Error)]
pub enum ShoplistError {
    /// A field value the user supplied was rejected (empty description,
    /// negative amount).
    #[error("{0}")]
    Input(String),

    /// A position did not refer to an item on the list.
    #[error("{0}")]
    Selection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
