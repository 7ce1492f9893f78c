//! UI-agnostic cell content.

use serde_json::Value;

use crate::record::display_value;

/// Semantic colour of a styled cell. The UI layer maps each tone to a palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Success,
    Info,
    Warning,
    Danger,
}

/// A button shown inside an [`Cell::Actions`] cell.
///
/// Clicking it does not run anything by itself: the table reports the `id`
/// together with the record index and the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAction {
    pub id: String,
    pub label: String,
    pub hint: Option<String>,
}

impl CellAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: None,
        }
    }

    /// Hover text for the button.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text. Raw field values are shown this way.
    Text(String),
    /// Coloured text, optionally emphasised (prices, totals).
    Styled {
        text: String,
        tone: Tone,
        strong: bool,
    },
    /// A small pill-shaped label (roles, statuses).
    Badge { text: String, tone: Tone },
    /// A group of row buttons.
    Actions(Vec<CellAction>),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self::Styled {
            text: text.into(),
            tone,
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>, tone: Tone) -> Self {
        Self::Styled {
            text: text.into(),
            tone,
            strong: true,
        }
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            text: text.into(),
            tone,
        }
    }

    pub fn actions(actions: impl IntoIterator<Item = CellAction>) -> Self {
        Self::Actions(actions.into_iter().collect())
    }

    /// Default rendering of a raw field value.
    pub fn from_value(value: &Value) -> Self {
        Self::Text(display_value(value))
    }

    /// The textual content of the cell, if it has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Styled { text, .. } | Self::Badge { text, .. } => Some(text),
            Self::Actions(_) => None,
        }
    }
}
