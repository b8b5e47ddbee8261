//! Part catalog rows (the material list).

use serde::{Deserialize, Serialize};

use crate::models::table::Keyed;

/// One row of the parts/materials catalog.
///
/// Parts are grouped by `category` in the material list panel and carry a
/// `color` value that is used verbatim as the display swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique identifier (e.g., "comp3").
    pub key: String,
    /// Display name (e.g., "Wooden cube").
    pub name: String,
    /// Grouping label for the material list (e.g., "Wooden parts").
    pub category: String,
    /// Display swatch value (e.g., "#8B5A2B").
    pub color: String,
}

impl Keyed for Part {
    fn key(&self) -> &str {
        &self.key
    }
}
