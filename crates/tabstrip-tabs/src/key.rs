//! Tab identifiers
//!
//! A tab is identified by an explicit key (string or integer) or, when it has
//! none, by its position in the list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabKey {
    Num(i64),
    Str(String),
}

impl TabKey {
    /// Positional reading of this key, used when it has to stand in for an
    /// index. Strings count only if they parse as an integer.
    pub fn as_position(&self) -> Option<i64> {
        match self {
            TabKey::Num(n) => Some(*n),
            TabKey::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for TabKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabKey::Num(n) => write!(f, "{}", n),
            TabKey::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TabKey {
    fn from(s: &str) -> Self {
        TabKey::Str(s.to_string())
    }
}

impl From<String> for TabKey {
    fn from(s: String) -> Self {
        TabKey::Str(s)
    }
}

impl From<i64> for TabKey {
    fn from(n: i64) -> Self {
        TabKey::Num(n)
    }
}

impl From<i32> for TabKey {
    fn from(n: i32) -> Self {
        TabKey::Num(n.into())
    }
}
