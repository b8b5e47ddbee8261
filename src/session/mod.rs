//! Session-scoped viewer state and the event surface that mutates it.
//!
//! A session owns exactly one [`NavigationState`] and one
//! [`PanelVisibility`]; both live for the whole session and are mutated
//! only through [`SessionState::apply`]. Each user interaction maps to one
//! [`UiEvent`], one discrete state update, and one full view recomputation —
//! there are no partial updates, and a rejected event leaves the state
//! untouched.

pub mod layout;
pub mod navigation;
pub mod panels;

pub use layout::{column_layout, ColumnLayout};
pub use navigation::{InvalidStepError, NavigationState};
pub use panels::{PanelAction, PanelId, PanelVisibility};

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dataset::Datasets;

/// Direction of a prev/next navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    /// Move to the step before the current one in dataset order.
    Back,
    /// Move to the step after the current one in dataset order.
    Forward,
}

/// One user interaction on the abstract event surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A specific step selector was clicked.
    SelectStep {
        /// Key of the selected step.
        step_id: String,
    },
    /// A prev/next navigation arrow was clicked.
    Navigate {
        /// Which arrow.
        direction: NavDirection,
    },
    /// A panel minimize/maximize control was clicked.
    Panel {
        /// The panel being toggled.
        panel: PanelId,
        /// Minimize or maximize.
        action: PanelAction,
    },
}

/// All mutable state of one viewer session.
#[derive(Debug, Clone)]
pub struct SessionState {
    datasets: Arc<Datasets>,
    /// Current step of the navigation state machine.
    pub navigation: NavigationState,
    /// Shown/hidden state of the five panels.
    pub panels: PanelVisibility,
}

impl SessionState {
    /// Creates a fresh session: first step active, every panel visible.
    pub fn new(datasets: Arc<Datasets>) -> Result<Self> {
        let navigation = NavigationState::new(&datasets.steps)
            .context("steps table is empty, no initial step")?;
        Ok(Self {
            datasets,
            navigation,
            panels: PanelVisibility::new(),
        })
    }

    /// Returns the shared datasets backing this session.
    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// Applies one event to the session.
    ///
    /// A failed event (unknown step id) mutates nothing; every successful
    /// event yields a deterministic next state from which the full view is
    /// recomputed.
    pub fn apply(&mut self, event: &UiEvent) -> std::result::Result<(), InvalidStepError> {
        match event {
            UiEvent::SelectStep { step_id } => {
                self.navigation.select_step(&self.datasets.steps, step_id)?;
            }
            UiEvent::Navigate { direction } => match direction {
                NavDirection::Back => self.navigation.step_back(&self.datasets.steps),
                NavDirection::Forward => self.navigation.step_forward(&self.datasets.steps),
            },
            UiEvent::Panel { panel, action } => {
                self.panels.apply(*panel, *action);
            }
        }
        Ok(())
    }
}
