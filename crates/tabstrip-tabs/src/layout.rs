//! Layout orientation
//!
//! `left`/`right` stack tabs vertically and never page the strip.
//! `bottom`/`right` draw the content pane before the selector strip.

use serde::{Deserialize, Serialize};

use crate::error::TabsError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// One of the two rendered halves of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Selector strip with the tab labels
    Bar,
    /// Host for the active pane
    Content,
}

impl Position {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self, Position::Bottom | Position::Right)
    }

    /// Render order of strip and pane. Index semantics are unaffected.
    pub fn sections(&self) -> [Section; 2] {
        if self.is_reversed() {
            [Section::Content, Section::Bar]
        } else {
            [Section::Bar, Section::Content]
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            _ => Err(TabsError::UnknownPosition(s.to_string())),
        }
    }
}
