//! Derived three-column layout widths.

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_COLUMNS, SIDE_COLUMN_MIN_WIDTH, SIDE_COLUMN_WIDTH};
use crate::session::panels::{PanelId, PanelVisibility};

/// Grid widths of the three body columns; always sums to [`GRID_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Width of the left column (product metadata, material list).
    pub left: u8,
    /// Width of the center column (3D scene, step description).
    pub center: u8,
    /// Width of the right column (tools, step list).
    pub right: u8,
}

/// Computes the column widths from the current panel visibility.
///
/// A side collapses to its minimum width only once every panel on that side
/// is hidden; the center column absorbs the remainder. Pure function of the
/// visibility snapshot — no history dependence.
pub fn column_layout(visibility: &PanelVisibility) -> ColumnLayout {
    let left_collapsed = !visibility.is_visible(PanelId::ProductMetadata)
        && !visibility.is_visible(PanelId::MaterialList);
    let right_collapsed =
        !visibility.is_visible(PanelId::Tools) && !visibility.is_visible(PanelId::StepList);

    let left = if left_collapsed {
        SIDE_COLUMN_MIN_WIDTH
    } else {
        SIDE_COLUMN_WIDTH
    };
    let right = if right_collapsed {
        SIDE_COLUMN_MIN_WIDTH
    } else {
        SIDE_COLUMN_WIDTH
    };

    ColumnLayout {
        left,
        center: GRID_COLUMNS - left - right,
        right,
    }
}
