//! Tab widget
//!
//! Drives the selection state machine through three call sites:
//! - construct: [`Tabs::new`]
//! - host re-render: [`Tabs::update`]
//! - interaction: [`Tabs::set_index`] / [`Tabs::goto_tab`]
//!
//! Every call site that can change the index ends in the same after-commit
//! step, which compares the index from before the cycle with the committed
//! one and queues a notification if they differ. Queued notifications are
//! handed to the change handler once the mutation has finished.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabstrip_tabs::{Mode, Offset, Pager, Selection, SetIndexOutcome, TabKey, TabPane};

use crate::config::TabsConfig;

/// Change notification: `(new_tab, previous_tab, new_index)`.
pub type ChangeHandler = Box<dyn FnMut(&TabPane, Option<&TabPane>, usize) + Send>;

/// A committed change waiting for the change handler.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingChange {
    pub tab: TabPane,
    pub previous_tab: Option<TabPane>,
    pub index: usize,
}

/// Record of the last committed index change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub previous_index: Option<usize>,
    pub index: usize,
    pub key: Option<TabKey>,
    pub changed_at: DateTime<Utc>,
}

pub struct Tabs {
    /// Instance id, used to tell widgets apart in logs
    id: String,
    config: TabsConfig,
    tabs: Vec<TabPane>,
    selection: Selection,
    /// Per-tab rate fixed from the initial tab count
    pager: Pager,
    /// Last offset produced by the pager; the strip keeps it until the next one
    strip_offset: Option<Offset>,
    last_change: Option<ChangeEvent>,
    on_change: Option<ChangeHandler>,
    pending: VecDeque<PendingChange>,
    /// Set while a `SharedTabs` call owns the handler
    dispatching: bool,
    /// Handler was set or cleared while a `SharedTabs` call owned it
    handler_replaced: bool,
}

impl Tabs {
    pub fn new(config: TabsConfig, tabs: Vec<TabPane>, current: Option<TabKey>) -> Self {
        let selection = Selection::new(&tabs, current, config.default_active_key.as_ref());
        let pager = Pager::new(config.page_size, tabs.len(), config.is_vertical());
        let id = Uuid::new_v4().to_string();

        tracing::debug!(
            widget_id = %id,
            tabs = tabs.len(),
            position = %config.position,
            mode = ?selection.mode(),
            index = ?selection.current_index(),
            "Created tab widget"
        );

        Self {
            id,
            config,
            tabs,
            selection,
            pager,
            strip_offset: None,
            last_change: None,
            on_change: None,
            pending: VecDeque::new(),
            dispatching: false,
            handler_replaced: false,
        }
    }

    pub fn with_on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&TabPane, Option<&TabPane>, usize) + Send + 'static,
    {
        self.set_on_change(handler);
        self
    }

    pub fn set_on_change<F>(&mut self, handler: F)
    where
        F: FnMut(&TabPane, Option<&TabPane>, usize) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self.handler_replaced = self.dispatching;
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
        self.handler_replaced = self.dispatching;
    }

    /// Host re-render with a new tab list and controlled key.
    ///
    /// `current = None` means the host is not controlling the selection on
    /// this cycle.
    pub fn update(&mut self, tabs: Vec<TabPane>, current: Option<TabKey>) {
        let previous = self.selection.current_index();
        self.selection.sync(&tabs, current);
        self.tabs = tabs;
        self.after_commit(previous);
        self.dispatch();
    }

    /// Navigate by position. Out-of-range requests are clamped; ignored while
    /// the host controls the selection.
    pub fn set_index(&mut self, index: i64) -> SetIndexOutcome {
        let previous = self.selection.current_index();
        let outcome = self.selection.set_index(self.tabs.len(), index, &self.pager);
        self.apply(previous, outcome)
    }

    /// Navigate by key, as if the tab were clicked.
    pub fn goto_tab(&mut self, key: impl Into<TabKey>) -> SetIndexOutcome {
        let key = key.into();
        let previous = self.selection.current_index();
        let outcome = self.selection.goto_tab(&self.tabs, &key, &self.pager);
        self.apply(previous, outcome)
    }

    fn apply(&mut self, previous: Option<usize>, outcome: SetIndexOutcome) -> SetIndexOutcome {
        match outcome {
            SetIndexOutcome::Moved {
                offset: Some(offset),
                ..
            } => {
                self.strip_offset = Some(offset);
                self.after_commit(previous);
            }
            SetIndexOutcome::Moved { offset: None, .. } => self.after_commit(previous),
            SetIndexOutcome::Ignored => {
                tracing::debug!(widget_id = %self.id, "Navigation ignored, selection is controlled");
            }
            SetIndexOutcome::Unchanged => {}
        }
        self.dispatch();
        outcome
    }

    fn after_commit(&mut self, previous: Option<usize>) {
        let Some(index) = self.selection.current_index() else {
            return;
        };
        if previous == Some(index) {
            return;
        }

        let Some(tab) = self.tabs.get(index) else {
            return;
        };
        let previous_tab = previous.and_then(|i| self.tabs.get(i));

        tracing::info!(
            widget_id = %self.id,
            from = ?previous,
            to = index,
            mode = ?self.selection.mode(),
            "Active tab changed"
        );

        self.last_change = Some(ChangeEvent {
            previous_index: previous,
            index,
            key: tab.key.clone(),
            changed_at: Utc::now(),
        });

        self.pending.push_back(PendingChange {
            tab: tab.clone(),
            previous_tab: previous_tab.cloned(),
            index,
        });
    }

    /// Deliver queued changes, unless a shared handle is delivering them.
    fn dispatch(&mut self) {
        if self.dispatching {
            return;
        }
        match self.on_change.as_mut() {
            Some(handler) => {
                while let Some(change) = self.pending.pop_front() {
                    handler(&change.tab, change.previous_tab.as_ref(), change.index);
                }
            }
            None => self.pending.clear(),
        }
    }

    pub(crate) fn is_dispatching(&self) -> bool {
        self.dispatching
    }

    /// Hand the change handler to the caller, which delivers queued changes
    /// outside its lock.
    pub(crate) fn begin_dispatch(&mut self) -> Option<ChangeHandler> {
        self.dispatching = true;
        self.handler_replaced = false;
        self.on_change.take()
    }

    pub(crate) fn drain_pending(&mut self) -> Vec<PendingChange> {
        self.pending.drain(..).collect()
    }

    /// Return the handler, unless it was replaced or cleared meanwhile.
    pub(crate) fn end_dispatch(&mut self, handler: Option<ChangeHandler>) {
        self.dispatching = false;
        if !self.handler_replaced {
            self.on_change = handler;
        }
        self.handler_replaced = false;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn tabs(&self) -> &[TabPane] {
        &self.tabs
    }

    pub fn current_index(&self) -> Option<usize> {
        self.selection.current_index()
    }

    pub fn current_tab(&self) -> Option<&TabPane> {
        self.current_index().and_then(|i| self.tabs.get(i))
    }

    pub fn mode(&self) -> Mode {
        self.selection.mode()
    }

    pub fn is_vertical(&self) -> bool {
        self.pager.vertical
    }

    pub fn rate(&self) -> f64 {
        self.pager.rate
    }

    pub fn strip_offset(&self) -> Option<Offset> {
        self.strip_offset
    }

    pub fn last_change(&self) -> Option<&ChangeEvent> {
        self.last_change.as_ref()
    }
}

impl std::fmt::Debug for Tabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabs")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("tabs", &self.tabs)
            .field("selection", &self.selection)
            .field("pager", &self.pager)
            .field("strip_offset", &self.strip_offset)
            .field("last_change", &self.last_change)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use tabstrip_tabs::Position;

    type Calls = Arc<Mutex<Vec<(Option<TabKey>, Option<TabKey>, usize)>>>;

    fn panes(n: usize) -> Vec<TabPane> {
        (0..n)
            .map(|i| TabPane::keyed(format!("t{}", i), format!("Tab {}", i)))
            .collect()
    }

    fn key(i: usize) -> TabKey {
        TabKey::from(format!("t{}", i))
    }

    fn recorded(
        config: TabsConfig,
        tabs: Vec<TabPane>,
        current: Option<TabKey>,
    ) -> (Tabs, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let widget = Tabs::new(config, tabs, current).with_on_change(move |tab, prev, index| {
            sink.lock()
                .unwrap()
                .push((tab.key.clone(), prev.and_then(|p| p.key.clone()), index));
        });
        (widget, calls)
    }

    #[test]
    fn test_uncontrolled_navigation_notifies() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(4), None);

        tabs.set_index(2);
        assert_eq!(tabs.current_index(), Some(2));
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[(Some(key(2)), Some(key(0)), 2)]
        );

        let event = tabs.last_change().unwrap();
        assert_eq!(event.previous_index, Some(0));
        assert_eq!(event.index, 2);
        assert_eq!(event.key, Some(key(2)));
    }

    #[test]
    fn test_same_index_is_silent() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(8), None);
        tabs.set_index(6);
        let offset = tabs.strip_offset();

        assert_eq!(tabs.set_index(6), SetIndexOutcome::Unchanged);
        assert_eq!(tabs.goto_tab(key(6)), SetIndexOutcome::Unchanged);
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(tabs.strip_offset(), offset);
    }

    #[test]
    fn test_controlled_ignores_navigation() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(4), Some(key(1)));

        assert_eq!(tabs.set_index(3), SetIndexOutcome::Ignored);
        assert_eq!(tabs.goto_tab(key(2)), SetIndexOutcome::Ignored);
        assert_eq!(tabs.current_index(), Some(1));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(tabs.strip_offset(), None);
    }

    #[test]
    fn test_controlled_sync_notifies() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(4), Some(key(0)));

        tabs.update(panes(4), Some(key(0)));
        assert!(calls.lock().unwrap().is_empty());

        tabs.update(panes(4), Some(key(3)));
        assert_eq!(tabs.current_index(), Some(3));
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[(Some(key(3)), Some(key(0)), 3)]
        );
    }

    #[test]
    fn test_controlled_key_change_without_index_change_is_silent() {
        let (mut tabs, calls) =
            recorded(TabsConfig::default(), panes(3), Some(TabKey::from("gone")));
        assert_eq!(tabs.current_index(), Some(0));

        tabs.update(panes(3), Some(key(0)));
        assert_eq!(tabs.current_index(), Some(0));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(tabs.mode(), Mode::Controlled);
    }

    #[test]
    fn test_release_control() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(4), Some(key(2)));

        tabs.update(panes(4), None);
        assert_eq!(tabs.mode(), Mode::Uncontrolled);
        assert_eq!(tabs.current_index(), Some(0));
        assert_eq!(calls.lock().unwrap().len(), 1);

        tabs.set_index(1);
        assert_eq!(tabs.current_index(), Some(1));
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_paging_scenario() {
        let mut tabs = Tabs::new(TabsConfig::default(), panes(8), None);
        assert_eq!(tabs.rate(), 20.0);

        tabs.goto_tab(key(6));
        assert_eq!(tabs.current_index(), Some(6));
        let offset = tabs.strip_offset().unwrap();
        assert_eq!(offset.delta, 3);
        assert_eq!(offset.percent, -60.0);

        tabs.set_index(1);
        assert_eq!(tabs.strip_offset().unwrap().delta, 0);
    }

    #[test]
    fn test_vertical_never_pages() {
        let config = TabsConfig::default().with_position(Position::Left);
        let mut tabs = Tabs::new(config, panes(12), None);
        assert!(tabs.is_vertical());

        for index in 0..12 {
            tabs.set_index(index);
            assert_eq!(tabs.strip_offset(), None);
        }
        assert_eq!(tabs.current_index(), Some(11));
    }

    #[test]
    fn test_default_active_key() {
        let config = TabsConfig::default().with_default_active_key("t2");
        let tabs = Tabs::new(config, panes(4), None);
        assert_eq!(tabs.current_index(), Some(2));
        assert_eq!(tabs.current_tab().map(|t| t.title.as_str()), Some("Tab 2"));
        assert!(tabs.last_change().is_none());
    }

    #[test]
    fn test_empty_widget() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), Vec::new(), None);
        assert_eq!(tabs.current_index(), None);
        assert_eq!(tabs.set_index(3), SetIndexOutcome::Unchanged);
        assert_eq!(tabs.goto_tab("anything"), SetIndexOutcome::Unchanged);
        assert!(tabs.current_tab().is_none());
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(tabs.rate(), 100.0);
    }

    #[test]
    fn test_tabs_arriving_later() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), Vec::new(), None);
        tabs.update(panes(3), None);
        assert_eq!(tabs.current_index(), Some(0));
        assert_eq!(calls.lock().unwrap().as_slice(), &[(Some(key(0)), None, 0)]);
    }

    #[test]
    fn test_shrinking_list_notifies() {
        let (mut tabs, calls) = recorded(TabsConfig::default(), panes(6), None);
        tabs.set_index(5);

        tabs.update(panes(2), None);
        assert_eq!(tabs.current_index(), Some(1));
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        // the previous index no longer exists in the new list
        assert_eq!(calls[1], (Some(key(1)), None, 1));
    }
}
