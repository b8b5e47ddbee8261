//! The step-navigation state machine.
//!
//! One state per step key; transitions either jump directly to a selected
//! step or move to the neighboring row in dataset order. The dataset row
//! order is the single source of "previous" and "next" — key strings carry
//! no ordering semantics.

use crate::models::{Step, Table};

/// A step id was referenced that does not exist in the steps table.
///
/// The triggering operation is rejected without mutating state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown step id '{0}'")]
pub struct InvalidStepError(pub String);

/// Holds the identifier of the currently active step.
///
/// The id is always a valid key of the steps table: it is initialized to
/// the first row and every transition either validates its target or moves
/// to an existing neighbor row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_step_id: String,
}

impl NavigationState {
    /// Creates the initial state pointing at the first step in dataset order.
    ///
    /// Returns `None` for an empty steps table (the loader rejects those
    /// before a session ever exists).
    pub fn new(steps: &Table<Step>) -> Option<Self> {
        steps.first().map(|step| Self {
            current_step_id: step.key.clone(),
        })
    }

    /// Returns the id of the currently active step.
    pub fn current_step_id(&self) -> &str {
        &self.current_step_id
    }

    /// Jumps directly to `step_id`.
    ///
    /// Valid for any id present in the steps table; an unknown id is
    /// rejected with [`InvalidStepError`] and the current step is unchanged.
    pub fn select_step(
        &mut self,
        steps: &Table<Step>,
        step_id: &str,
    ) -> Result<(), InvalidStepError> {
        if !steps.contains_key(step_id) {
            return Err(InvalidStepError(step_id.to_string()));
        }
        self.current_step_id = step_id.to_string();
        Ok(())
    }

    /// Moves to the step immediately after the current one in dataset order.
    ///
    /// At the last step this is a no-op: the state clamps and the forward
    /// control has no target (see [`Self::forward_target`]).
    pub fn step_forward(&mut self, steps: &Table<Step>) {
        if let Some(next) = steps.key_after(&self.current_step_id) {
            self.current_step_id = next.to_string();
        }
    }

    /// Moves to the step immediately before the current one in dataset order.
    ///
    /// At the first step this is a no-op, mirroring [`Self::step_forward`].
    pub fn step_back(&mut self, steps: &Table<Step>) {
        if let Some(previous) = steps.key_before(&self.current_step_id) {
            self.current_step_id = previous.to_string();
        }
    }

    /// Target of the forward navigation control after the last transition:
    /// the step one past the current one, absent at the end of the sequence.
    pub fn forward_target<'a>(&self, steps: &'a Table<Step>) -> Option<&'a str> {
        steps.key_after(&self.current_step_id)
    }

    /// Target of the backward navigation control, absent at the first step.
    pub fn back_target<'a>(&self, steps: &'a Table<Step>) -> Option<&'a str> {
        steps.key_before(&self.current_step_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(key: &str) -> Step {
        Step {
            key: key.to_string(),
            name: format!("Step {key}"),
            description: String::new(),
            tools: String::new(),
            tools_img_path: None,
            notifications: None,
            object_names: vec![],
        }
    }

    fn steps_table(keys: &[&str]) -> Table<Step> {
        Table::from_rows(keys.iter().map(|k| step(k)).collect()).unwrap()
    }

    #[test]
    fn test_initial_state_is_first_row() {
        let steps = steps_table(&["step1", "step2", "step3"]);
        let nav = NavigationState::new(&steps).unwrap();
        assert_eq!(nav.current_step_id(), "step1");
    }

    #[test]
    fn test_select_step_moves_directly() {
        let steps = steps_table(&["step1", "step2", "step3"]);
        let mut nav = NavigationState::new(&steps).unwrap();

        nav.select_step(&steps, "step3").unwrap();
        assert_eq!(nav.current_step_id(), "step3");

        nav.select_step(&steps, "step1").unwrap();
        assert_eq!(nav.current_step_id(), "step1");
    }

    #[test]
    fn test_select_unknown_step_leaves_state_unchanged() {
        let steps = steps_table(&["step1", "step2"]);
        let mut nav = NavigationState::new(&steps).unwrap();
        nav.select_step(&steps, "step2").unwrap();

        let err = nav.select_step(&steps, "step404").unwrap_err();
        assert_eq!(err, InvalidStepError("step404".to_string()));
        assert_eq!(nav.current_step_id(), "step2");
    }

    #[test]
    fn test_forward_retargets_controls() {
        let steps = steps_table(&["step1", "step2", "step3"]);
        let mut nav = NavigationState::new(&steps).unwrap();

        nav.step_forward(&steps);
        assert_eq!(nav.current_step_id(), "step2");
        // Controls are recomputed to point at the new current ± 1.
        assert_eq!(nav.forward_target(&steps), Some("step3"));
        assert_eq!(nav.back_target(&steps), Some("step1"));
    }

    #[test]
    fn test_forward_clamps_at_last_step() {
        let steps = steps_table(&["step1", "step2"]);
        let mut nav = NavigationState::new(&steps).unwrap();
        nav.step_forward(&steps);

        nav.step_forward(&steps);
        assert_eq!(nav.current_step_id(), "step2");
        assert_eq!(nav.forward_target(&steps), None);
    }

    #[test]
    fn test_back_clamps_at_first_step() {
        let steps = steps_table(&["step1", "step2"]);
        let mut nav = NavigationState::new(&steps).unwrap();

        nav.step_back(&steps);
        assert_eq!(nav.current_step_id(), "step1");
        assert_eq!(nav.back_target(&steps), None);
    }

    #[test]
    fn test_row_order_wins_over_key_order() {
        // Row order deliberately disagrees with numeric key order.
        let steps = steps_table(&["step2", "step10", "step1"]);
        let mut nav = NavigationState::new(&steps).unwrap();
        assert_eq!(nav.current_step_id(), "step2");

        nav.step_forward(&steps);
        assert_eq!(nav.current_step_id(), "step10");

        nav.step_forward(&steps);
        assert_eq!(nav.current_step_id(), "step1");
        assert_eq!(nav.forward_target(&steps), None);
    }

    #[test]
    fn test_empty_table_has_no_initial_state() {
        let steps: Table<Step> = Table::from_rows(vec![]).unwrap();
        assert!(NavigationState::new(&steps).is_none());
    }
}
