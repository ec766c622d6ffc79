//! Selection State Machine
//!
//! Owns the active index. Selection is either controlled (the host passes a
//! current key on every update) or uncontrolled (the widget moves the index
//! itself). The mode is re-evaluated on every update cycle.
//!
//! ```text
//!            host update, key changed
//!   ┌──────────────────────────────────────┐
//!   ▼                                      │
//! Controlled ──set_index──▶ ignored        │
//!   │ key dropped                          │
//!   ▼                                      │
//! Uncontrolled ──set_index──▶ clamp ──▶ same? ──yes──▶ unchanged
//!                                         │no
//!                                         ▼
//!                                pager offset, commit
//! ```

use serde::{Deserialize, Serialize};

use crate::key::TabKey;
use crate::pager::{Offset, Pager};
use crate::resolver::resolve;
use crate::tab::TabPane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Host dictates the active tab through its current key
    Controlled,
    /// Widget owns the active index
    Uncontrolled,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetIndexOutcome {
    /// Selection is controlled, request dropped
    Ignored,
    /// Clamped request equals the current index (or the list is empty)
    Unchanged,
    /// Index committed
    Moved {
        from: Option<usize>,
        to: usize,
        /// New strip offset, if the strip pages
        offset: Option<Offset>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    current_index: Option<usize>,
    /// Controlled key seen on the last update cycle
    controlled_key: Option<TabKey>,
}

impl Selection {
    /// Initial selection. The controlled key wins over the default key.
    pub fn new(
        tabs: &[TabPane],
        current: Option<TabKey>,
        default_active_key: Option<&TabKey>,
    ) -> Self {
        let current_index = resolve(tabs, current.as_ref().or(default_active_key));
        Self {
            current_index,
            controlled_key: current,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn controlled_key(&self) -> Option<&TabKey> {
        self.controlled_key.as_ref()
    }

    pub fn mode(&self) -> Mode {
        if self.controlled_key.is_some() {
            Mode::Controlled
        } else {
            Mode::Uncontrolled
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.mode() == Mode::Controlled
    }

    /// Host update cycle: compare the supplied key with the recorded one.
    ///
    /// A different key (including switching between modes) is re-resolved
    /// against `tabs` and adopted unconditionally. Afterwards the index is
    /// brought back in range of `tabs`. Returns true if the index was
    /// re-derived or re-clamped.
    pub fn sync(&mut self, tabs: &[TabPane], current: Option<TabKey>) -> bool {
        if current != self.controlled_key {
            let index = resolve(tabs, current.as_ref());
            tracing::debug!(
                from = ?self.controlled_key,
                to = ?current,
                index = ?index,
                "Controlled key changed"
            );
            self.controlled_key = current;
            self.current_index = index;
            return true;
        }

        self.reconcile(tabs)
    }

    /// Keep the index valid after the tab list changed under an unchanged key.
    fn reconcile(&mut self, tabs: &[TabPane]) -> bool {
        let valid = match self.current_index {
            Some(index) => index < tabs.len(),
            None => tabs.is_empty(),
        };
        if valid {
            return false;
        }

        let index = match (&self.controlled_key, self.current_index) {
            (Some(key), _) => resolve(tabs, Some(key)),
            (None, _) if tabs.is_empty() => None,
            (None, Some(index)) => Some(index.min(tabs.len() - 1)),
            (None, None) => Some(0),
        };

        tracing::debug!(from = ?self.current_index, to = ?index, "Re-clamped selection");
        self.current_index = index;
        true
    }

    /// Navigate to `requested`. Ignored while controlled.
    ///
    /// The request is clamped into the list. When the clamped index differs
    /// from the current one the pager is consulted before the index commits.
    pub fn set_index(
        &mut self,
        tab_count: usize,
        requested: i64,
        pager: &Pager,
    ) -> SetIndexOutcome {
        if self.is_controlled() {
            tracing::debug!(requested, "Ignoring set_index on controlled selection");
            return SetIndexOutcome::Ignored;
        }

        if tab_count == 0 {
            return SetIndexOutcome::Unchanged;
        }

        let index = requested.clamp(0, tab_count as i64 - 1) as usize;
        if self.current_index == Some(index) {
            return SetIndexOutcome::Unchanged;
        }

        let offset = pager.offset_for(index, tab_count);

        let from = self.current_index;
        self.current_index = Some(index);

        tracing::debug!(from = ?from, to = index, offset = ?offset, "Selection moved");

        SetIndexOutcome::Moved {
            from,
            to: index,
            offset,
        }
    }

    /// Navigate by key, as if the tab were clicked.
    pub fn goto_tab(
        &mut self,
        tabs: &[TabPane],
        key: &TabKey,
        pager: &Pager,
    ) -> SetIndexOutcome {
        match resolve(tabs, Some(key)) {
            Some(index) => self.set_index(tabs.len(), index as i64, pager),
            None if self.is_controlled() => SetIndexOutcome::Ignored,
            None => SetIndexOutcome::Unchanged,
        }
    }
}
