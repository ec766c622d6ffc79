//! Tabstrip Core
//!
//! Host-facing tab widget. The host feeds it tab lists and an optional
//! controlled key on every render, forwards clicks as `set_index`/`goto_tab`,
//! and draws whatever [`RenderModel`] says. The widget never touches the
//! rendering layer itself.

mod config;
mod error;
mod render;
mod shared;
mod widget;

pub use config::TabsConfig;
pub use error::CoreError;
pub use render::{RenderModel, TabInfo};
pub use shared::SharedTabs;
pub use widget::{ChangeEvent, ChangeHandler, PendingChange, Tabs};

// Re-export the decision core
pub use tabstrip_tabs::{
    compute_offset, per_tab_rate, resolve, Mode, Offset, Pager, Position, Section, Selection,
    SetIndexOutcome, TabKey, TabPane, TabsError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
