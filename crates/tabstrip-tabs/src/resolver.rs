//! Index resolution
//!
//! Turns a tab identifier into a position in the tab list. Never fails: an
//! identifier that matches nothing lands on the first tab.

use crate::key::TabKey;
use crate::tab::TabPane;

/// Resolve `key` against `tabs`.
///
/// Returns `None` only for an empty list. Lookup order:
/// 1. first tab whose explicit key equals `key`
/// 2. first unkeyed tab whose position equals the positional reading of `key`
/// 3. if no tab has an explicit key, the positional reading clamped into range
/// 4. index 0
pub fn resolve(tabs: &[TabPane], key: Option<&TabKey>) -> Option<usize> {
    if tabs.is_empty() {
        return None;
    }

    let Some(key) = key else {
        return Some(0);
    };

    if let Some(index) = tabs.iter().position(|tab| tab.key.as_ref() == Some(key)) {
        return Some(index);
    }

    let position = key.as_position();

    if let Some(pos) = position {
        let by_position = tabs
            .iter()
            .enumerate()
            .find(|(i, tab)| !tab.has_key() && *i as i64 == pos)
            .map(|(i, _)| i);
        if by_position.is_some() {
            return by_position;
        }

        if tabs.iter().all(|tab| !tab.has_key()) {
            return Some(pos.clamp(0, tabs.len() as i64 - 1) as usize);
        }
    }

    tracing::debug!(key = %key, "Unresolved tab key, falling back to first tab");
    Some(0)
}
