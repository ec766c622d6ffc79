//! Widget configuration

use serde::{Deserialize, Serialize};

use tabstrip_tabs::{Position, TabKey};

use crate::Result;

/// Options fixed when the widget is built.
///
/// The controlled `current` key and the change handler are not part of the
/// configuration; they are supplied per update cycle and on the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsConfig {
    /// Where the selector strip sits relative to the pane
    pub position: Position,
    /// Passed through to the renderer
    pub animated: bool,
    /// Passed through to the renderer
    pub swipeable: bool,
    /// Strip height in pixels, passed through to the renderer
    pub tab_height: u32,
    /// Tabs per page; 0 disables strip paging
    pub page_size: usize,
    /// Wrap the rendered widget in a sticky container
    pub sticky: bool,
    /// Initial tab when selection is uncontrolled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_active_key: Option<TabKey>,
}

impl TabsConfig {
    /// Parse a camelCase JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set the position from its textual name (`top`, `bottom`, `left`, `right`).
    pub fn with_position_str(mut self, position: &str) -> Result<Self> {
        self.position = position.parse()?;
        Ok(self)
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_default_active_key(mut self, key: impl Into<TabKey>) -> Self {
        self.default_active_key = Some(key.into());
        self
    }

    pub fn is_vertical(&self) -> bool {
        self.position.is_vertical()
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            position: Position::Top,
            animated: true,
            swipeable: false,
            tab_height: 32,
            page_size: 5,
            sticky: false,
            default_active_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use tabstrip_tabs::TabPane;

    #[test]
    fn test_defaults() {
        let config = TabsConfig::default();
        assert_eq!(config.position, Position::Top);
        assert!(config.animated);
        assert!(!config.swipeable);
        assert_eq!(config.tab_height, 32);
        assert_eq!(config.page_size, 5);
        assert!(!config.sticky);
        assert!(config.default_active_key.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config =
            TabsConfig::from_json(r#"{"position": "left", "pageSize": 3, "defaultActiveKey": 2}"#)
                .unwrap();
        assert_eq!(config.position, Position::Left);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.default_active_key, Some(TabKey::Num(2)));
        assert_eq!(config.tab_height, 32);
        assert!(config.is_vertical());

        assert_eq!(TabsConfig::from_json("{}").unwrap(), TabsConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TabsConfig::default()
            .with_position(Position::Bottom)
            .with_default_active_key("inbox");
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""defaultActiveKey":"inbox""#));
        assert_eq!(TabsConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_page_size_builder() {
        let config = TabsConfig::default().with_page_size(0);
        assert_eq!(config.page_size, 0);
        let panes: Vec<TabPane> = (0..9).map(|i| TabPane::new(i.to_string())).collect();
        let tabs = crate::Tabs::new(config, panes.clone(), None);
        assert_eq!(tabs.rate(), 100.0);

        let mut tabs = crate::Tabs::new(
            TabsConfig::default().with_page_size(3),
            panes,
            None,
        );
        tabs.set_index(8);
        let offset = tabs.strip_offset().unwrap();
        assert_eq!(offset.delta, 6);
        assert!((offset.percent + 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            TabsConfig::from_json(r#"{"position": "middle"}"#),
            Err(CoreError::Serialization(_))
        ));
        assert!(matches!(
            TabsConfig::default().with_position_str("diagonal"),
            Err(CoreError::Tabs(_))
        ));
        assert_eq!(
            TabsConfig::default()
                .with_position_str("Right")
                .unwrap()
                .position,
            Position::Right
        );
    }
}
