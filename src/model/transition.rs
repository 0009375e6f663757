use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The three fixed points of the overview state machine. Transitions between
/// them are continuous; each state has a well-defined layout on its own.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum UiState {
    #[default]
    Hidden = 0,
    WindowPicker = 1,
    AppGrid = 2,
}

/// Where the overview currently sits between two states. Supplied fresh each
/// frame by the animation subsystem driving the overview.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    pub initial_state: UiState,
    pub final_state: UiState,
    pub progress: f64,
    pub transitioning: bool,
}

impl TransitionDescriptor {
    /// A descriptor resting at a single state.
    pub fn stationary(state: UiState) -> Self {
        TransitionDescriptor {
            initial_state: state,
            final_state: state,
            progress: 1.0,
            transitioning: false,
        }
    }

    pub fn between(initial: UiState, r#final: UiState, progress: f64) -> Self {
        TransitionDescriptor {
            initial_state: initial,
            final_state: r#final,
            progress,
            transitioning: initial != r#final,
        }
        .normalized()
    }

    /// Enforces the descriptor invariants: progress is clamped to [0, 1],
    /// non-finite progress collapses to the final state, and equal endpoints
    /// are never reported as transitioning.
    pub fn normalized(self) -> Self {
        let progress = if self.progress.is_finite() {
            self.progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let transitioning = self.transitioning && self.initial_state != self.final_state;
        TransitionDescriptor {
            progress,
            transitioning,
            ..self
        }
    }

    /// The state whose layout applies when no interpolation is in flight.
    pub fn current_state(&self) -> UiState {
        if self.transitioning && self.progress < 0.5 {
            self.initial_state
        } else {
            self.final_state
        }
    }
}
