//! Assembly step rows.

use serde::{Deserialize, Serialize};

use crate::models::table::Keyed;

/// One row of the steps catalog.
///
/// The row position in the steps file defines the navigation order; the key
/// string itself carries no ordering semantics. Every name in `object_names`
/// must be resolvable by the geometry resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique identifier (e.g., "step7").
    pub key: String,
    /// Display name shown in the step list and the description panel.
    pub name: String,
    /// Instruction text for this step.
    pub description: String,
    /// Name of the tool(s) required for this step.
    pub tools: String,
    /// Image file for the tools panel, relative to the static image directory.
    pub tools_img_path: Option<String>,
    /// Safety notification text; absent for uncritical steps.
    pub notifications: Option<String>,
    /// Names of the 3D objects rendered while this step is active.
    pub object_names: Vec<String>,
}

impl Step {
    /// Splits a comma-separated object-names field into an ordered list.
    ///
    /// Whitespace is stripped and empty entries (e.g., from a trailing
    /// comma) are dropped.
    pub fn parse_object_names(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }

    /// Returns true if this step carries a safety notification.
    pub fn has_notification(&self) -> bool {
        self.notifications
            .as_ref()
            .is_some_and(|text| !text.is_empty())
    }
}

impl Keyed for Step {
    fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_names_basic() {
        assert_eq!(
            Step::parse_object_names("body,head,leg_fl"),
            vec!["body", "head", "leg_fl"]
        );
    }

    #[test]
    fn test_parse_object_names_strips_whitespace() {
        assert_eq!(
            Step::parse_object_names(" body , head ,leg_fl "),
            vec!["body", "head", "leg_fl"]
        );
    }

    #[test]
    fn test_parse_object_names_drops_empty_entries() {
        assert_eq!(Step::parse_object_names("body,,head,"), vec!["body", "head"]);
        assert!(Step::parse_object_names("").is_empty());
        assert!(Step::parse_object_names(" , ").is_empty());
    }

    #[test]
    fn test_has_notification() {
        let mut step = Step {
            key: "step1".to_string(),
            name: "Base plate".to_string(),
            description: "Place the base plate".to_string(),
            tools: "None".to_string(),
            tools_img_path: None,
            notifications: None,
            object_names: vec!["base".to_string()],
        };
        assert!(!step.has_notification());

        step.notifications = Some(String::new());
        assert!(!step.has_notification());

        step.notifications = Some("Wear gloves".to_string());
        assert!(step.has_notification());
    }
}
