//! Independent minimize/maximize state for the viewer panels.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Identifier of a minimizable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    /// Product name and variant selection (left column, top).
    ProductMetadata,
    /// Material list grouped by category (left column, bottom).
    MaterialList,
    /// Required tools for the current step (right column, top).
    Tools,
    /// Step selector list (right column, bottom).
    StepList,
    /// Current step name and instruction text (center column, below the scene).
    StepDescription,
}

impl PanelId {
    /// All panels, in layout order.
    pub const ALL: [PanelId; 5] = [
        PanelId::ProductMetadata,
        PanelId::MaterialList,
        PanelId::Tools,
        PanelId::StepList,
        PanelId::StepDescription,
    ];

    /// Returns the kebab-case identifier used on the event surface.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::ProductMetadata => "product-metadata",
            PanelId::MaterialList => "material-list",
            PanelId::Tools => "tools",
            PanelId::StepList => "step-list",
            PanelId::StepDescription => "step-description",
        }
    }
}

/// Direction of a panel toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelAction {
    /// Hide the panel content, show the collapsed placeholder.
    Minimize,
    /// Restore the panel content, hide the placeholder.
    Maximize,
}

/// Shown/hidden state of every panel.
///
/// All panels start visible. Each toggle is independent, and repeating the
/// same toggle is a no-op rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    hidden: HashSet<PanelId>,
}

impl PanelVisibility {
    /// Creates the initial state with every panel visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the panel content is currently shown.
    pub fn is_visible(&self, panel: PanelId) -> bool {
        !self.hidden.contains(&panel)
    }

    /// Applies a minimize/maximize toggle to one panel.
    pub fn apply(&mut self, panel: PanelId, action: PanelAction) {
        match action {
            PanelAction::Minimize => {
                self.hidden.insert(panel);
            }
            PanelAction::Maximize => {
                self.hidden.remove(&panel);
            }
        }
    }
}
