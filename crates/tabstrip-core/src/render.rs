//! Render model
//!
//! Declarative snapshot handed to the selector strip and the pane host.
//! The renderer applies `strip_offset` to the strip; nothing here touches a
//! rendering handle.

use serde::{Deserialize, Serialize};

use tabstrip_tabs::{Mode, Offset, Position, Section, TabKey};

use crate::widget::Tabs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub key: Option<TabKey>,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub widget_id: String,
    pub position: Position,
    pub vertical: bool,
    /// Draw order of strip and pane
    pub sections: [Section; 2],
    pub current_index: Option<usize>,
    pub mode: Mode,
    pub rate: f64,
    pub strip_offset: Option<Offset>,
    pub sticky: bool,
    pub animated: bool,
    pub swipeable: bool,
    pub tab_height: u32,
    pub tabs: Vec<TabInfo>,
}

impl From<&Tabs> for RenderModel {
    fn from(widget: &Tabs) -> Self {
        let config = widget.config();
        let current = widget.current_index();

        Self {
            widget_id: widget.id().to_string(),
            position: config.position,
            vertical: widget.is_vertical(),
            sections: config.position.sections(),
            current_index: current,
            mode: widget.mode(),
            rate: widget.rate(),
            strip_offset: widget.strip_offset(),
            sticky: config.sticky,
            animated: config.animated,
            swipeable: config.swipeable,
            tab_height: config.tab_height,
            tabs: widget
                .tabs()
                .iter()
                .enumerate()
                .map(|(i, tab)| TabInfo {
                    key: tab.key.clone(),
                    title: tab.title.clone(),
                    active: current == Some(i),
                })
                .collect(),
        }
    }
}

impl Tabs {
    pub fn render_model(&self) -> RenderModel {
        RenderModel::from(self)
    }
}
