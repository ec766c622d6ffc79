//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabsError {
    #[error("Unknown tab position: {0}")]
    UnknownPosition(String),
}
