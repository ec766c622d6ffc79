//! Shared widget handle
//!
//! The selector strip receives a setter callback as a render prop. The
//! callback outlives the borrow of the widget, so the widget sits behind an
//! `Arc<Mutex<..>>` and the callback holds its own clone.
//!
//! Change handlers run after the lock is released, so a handler may navigate
//! through the same handle. Changes committed from inside a handler are
//! delivered once that handler returns.

use parking_lot::Mutex;
use std::sync::Arc;

use tabstrip_tabs::{SetIndexOutcome, TabKey, TabPane};

use crate::render::RenderModel;
use crate::widget::Tabs;

/// Thread-safe handle to a [`Tabs`] widget.
pub struct SharedTabs {
    inner: Arc<Mutex<Tabs>>,
}

/// Run `f` on the widget, then deliver the changes it queued with the lock
/// released. Nested calls made by a handler only queue.
fn mutate<F, T>(inner: &Mutex<Tabs>, f: F) -> T
where
    F: FnOnce(&mut Tabs) -> T,
{
    let mut guard = inner.lock();
    if guard.is_dispatching() {
        return f(&mut guard);
    }

    let mut handler = guard.begin_dispatch();
    let out = f(&mut guard);

    loop {
        let changes = guard.drain_pending();
        if changes.is_empty() {
            break;
        }
        drop(guard);
        if let Some(handler) = handler.as_mut() {
            for change in &changes {
                handler(&change.tab, change.previous_tab.as_ref(), change.index);
            }
        }
        guard = inner.lock();
    }

    guard.end_dispatch(handler);
    out
}

impl SharedTabs {
    pub fn new(tabs: Tabs) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tabs)),
        }
    }

    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Tabs) -> T,
    {
        f(&self.inner.lock())
    }

    pub fn with_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Tabs) -> T,
    {
        mutate(&self.inner, f)
    }

    pub fn update(&self, tabs: Vec<TabPane>, current: Option<TabKey>) {
        mutate(&self.inner, |widget| widget.update(tabs, current));
    }

    pub fn set_index(&self, index: i64) -> SetIndexOutcome {
        mutate(&self.inner, |widget| widget.set_index(index))
    }

    pub fn goto_tab(&self, key: impl Into<TabKey>) -> SetIndexOutcome {
        let key = key.into();
        mutate(&self.inner, |widget| widget.goto_tab(key))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.inner.lock().current_index()
    }

    pub fn render_model(&self) -> RenderModel {
        self.inner.lock().render_model()
    }

    /// Setter callback for the selector strip and pane host.
    pub fn setter(&self) -> impl Fn(i64) -> SetIndexOutcome + Send + Sync + 'static {
        let inner = Arc::clone(&self.inner);
        move |index| mutate(&inner, |widget| widget.set_index(index))
    }
}

impl Clone for SharedTabs {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
