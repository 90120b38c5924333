use crate::keycodes::KeyCode;
use crate::layouts::LayoutId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unsupported layout: '{0}'")]
    UnsupportedLayout(String),

    #[error("Key '{key}' does not exist on layout '{layout}'")]
    InvalidKeyForLayout { key: KeyCode, layout: LayoutId },

    #[error(
        "Binding does not fit layout '{layout}': action {action} lands on row {row}, col {col}"
    )]
    InvalidConfiguration {
        layout: LayoutId,
        action: usize,
        row: i64,
        col: i64,
    },

    #[error("Action index {index} out of range (binding has {len} actions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A binding needs at least one key")]
    EmptyBinding,

    #[error("Layout Data Error: {0}")]
    InvalidLayoutData(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KsResult<T> = Result<T, LayoutError>;
