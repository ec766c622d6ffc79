//! Selector strip paging
//!
//! When there are more tabs than fit on one page, the strip slides left so
//! the active tab stays in view. The pager is stateless: it returns the
//! offset and the renderer applies it.

use serde::{Deserialize, Serialize};

/// Horizontal shift of the selector strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Number of tab widths the strip is shifted by
    pub delta: usize,
    /// Signed shift as a percentage of the strip viewport
    pub percent: f64,
}

/// Paging settings fixed when the widget is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pager {
    /// Tabs per page, 0 for an unpaged strip
    pub page_size: usize,
    /// Per-tab width, see [`per_tab_rate`]
    pub rate: f64,
    /// Vertical strips never slide
    pub vertical: bool,
}

impl Pager {
    pub fn new(page_size: usize, initial_count: usize, vertical: bool) -> Self {
        Self {
            page_size,
            rate: per_tab_rate(page_size, initial_count),
            vertical,
        }
    }

    /// Offset for moving to `index`, `None` for vertical layouts.
    pub fn offset_for(&self, index: usize, total_count: usize) -> Option<Offset> {
        if self.vertical {
            return None;
        }
        compute_offset(index, self.page_size, total_count, self.rate)
    }
}

/// Width of one tab as a percentage of the viewport.
///
/// Computed once from the initial tab count. With no page size or no tabs
/// every tab gets the full width.
pub fn per_tab_rate(page_size: usize, tab_count: usize) -> f64 {
    match page_size.min(tab_count) {
        0 => 100.0,
        visible => 100.0 / visible as f64,
    }
}

/// Offset that keeps `index` visible, or `None` when the strip stays at rest.
///
/// The active tab is kept two slots from the trailing edge of the page, and
/// the window never slides past the last tab.
pub fn compute_offset(
    index: usize,
    page_size: usize,
    total_count: usize,
    rate: f64,
) -> Option<Offset> {
    if page_size == 0 || total_count == 0 {
        return None;
    }

    let last = total_count as i64 - 1;
    let page = page_size as i64;
    if last <= page {
        return None;
    }

    let mut delta = (index as i64 - page + 2).max(0);
    if last < delta + page {
        delta = last - page + 1;
    }

    let delta = delta as usize;
    Some(Offset {
        delta,
        percent: -(delta as f64) * rate,
    })
}
