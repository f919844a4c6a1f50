use super::TabKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab bar requires at least one tab")]
    Empty,

    #[error("tab key '{0}' is configured more than once")]
    DuplicateKey(TabKey),

    #[error("tab key '{0}' is not configured")]
    InvalidSelection(String),
}
