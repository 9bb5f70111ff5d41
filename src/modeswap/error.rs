use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Layer '{node}' references missing shared style {id}")]
    DanglingStyle { node: String, id: Uuid },

    #[error("Symbol instance '{node}' references missing symbol master {id}")]
    DanglingSymbol { node: String, id: Uuid },

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SwitchError>;
