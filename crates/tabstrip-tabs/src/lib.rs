//! Tabstrip Tabs
//!
//! Decision core of the tab widget: which pane is active, how a tab key maps
//! to a position, and how far the selector strip slides when there are more
//! tabs than fit on one page.
//!
//! ```text
//! key ──resolve──▶ index ──Selection──▶ committed index
//!                                │
//!                                └──pager──▶ strip offset (horizontal only)
//! ```

mod error;
mod key;
mod layout;
mod pager;
mod resolver;
mod selection;
mod tab;

pub use error::TabsError;
pub use key::TabKey;
pub use layout::{Position, Section};
pub use pager::{compute_offset, per_tab_rate, Offset, Pager};
pub use resolver::resolve;
pub use selection::{Mode, Selection, SetIndexOutcome};
pub use tab::TabPane;

pub type Result<T> = std::result::Result<T, TabsError>;
