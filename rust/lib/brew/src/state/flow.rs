//! Flow state — stored at `brew/flow`.

use serde::Serialize;

use crate::form::{label, FormStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowStep {
    Idle,
    Basics,
    Customization,
    Rating,
    Submitting,
    Done,
    /// Submission failed; the rating step stays on screen with saving blocked.
    Error,
}

/// Where the brewing flow is, and the last submission error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowState {
    pub step: FlowStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Which action controls a renderer should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub add_new_brew: bool,
    pub customize_brew: bool,
    pub rate: bool,
    pub save_brew: bool,
}

impl FlowState {
    pub const PATH: &'static str = "brew/flow";

    pub fn idle() -> Self {
        Self::at(FlowStep::Idle)
    }

    pub fn at(step: FlowStep) -> Self {
        Self { step, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            step: FlowStep::Error,
            error: Some(message.into()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.step == FlowStep::Submitting
    }

    /// True while a draft exists and has not been saved.
    pub fn is_adding(&self) -> bool {
        matches!(
            self.step,
            FlowStep::Basics
                | FlowStep::Customization
                | FlowStep::Rating
                | FlowStep::Submitting
                | FlowStep::Error
        )
    }

    /// Page heading while a brew is being added.
    pub fn heading(&self) -> Option<&'static str> {
        self.is_adding().then_some(label::NEW_BREW)
    }

    /// The form a renderer should show for this step.
    pub fn form_step(&self) -> Option<FormStep> {
        match self.step {
            FlowStep::Basics => Some(FormStep::Basics),
            FlowStep::Customization => Some(FormStep::Customization),
            FlowStep::Rating | FlowStep::Submitting | FlowStep::Error => Some(FormStep::Rating),
            FlowStep::Idle | FlowStep::Done => None,
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            add_new_brew: !self.is_submitting(),
            customize_brew: self.step == FlowStep::Basics,
            rate: self.step == FlowStep::Customization,
            save_brew: self.step == FlowStep::Rating,
        }
    }
}
