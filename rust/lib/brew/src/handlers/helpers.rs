//! Shared helpers for handlers.

use brewlog_flux::StateStore;
use tracing::{info, warn};

use crate::form::{FormState, FormStep};
use crate::state::*;

/// Current flow state; a fresh store counts as idle.
pub fn flow(store: &StateStore) -> FlowState {
    store.get_as::<FlowState>(FlowState::PATH).unwrap_or_else(FlowState::idle)
}

/// Check the flow is at `expected`; log and return `false` otherwise.
pub fn expect_step(store: &StateStore, expected: FlowStep, request: &str) -> bool {
    let actual = flow(store).step;
    if actual != expected {
        warn!(request, ?expected, ?actual, "request rejected: flow is at another step");
        return false;
    }
    true
}

/// Move the flow from Rating to Submitting in one store update.
///
/// Returns `false` if the flow was no longer at Rating, e.g. another
/// save claimed it first.
pub fn begin_submit(store: &StateStore) -> bool {
    store.update::<FlowState, _>(FlowState::PATH, |current| match current {
        Some(flow) if flow.step == FlowStep::Rating => Some(FlowState::at(FlowStep::Submitting)),
        _ => None,
    })
}

/// The open form, if it belongs to `step`.
pub fn form(store: &StateStore, step: FormStep) -> Option<FormState> {
    match store.get_as::<FormState>(FormState::PATH) {
        Some(form) if form.step == step => Some(form),
        Some(form) => {
            warn!(expected = ?step, actual = ?form.step, "open form belongs to another step");
            None
        }
        None => {
            warn!(expected = ?step, "no form open");
            None
        }
    }
}

pub fn draft(store: &StateStore) -> BrewDraft {
    store.get_as::<BrewDraft>(BrewDraft::PATH).unwrap_or_default()
}

pub fn discard_draft(store: &StateStore) {
    store.remove(BrewDraft::PATH);
    store.remove(FormState::PATH);
}

pub fn navigate(store: &StateStore, route: Route) {
    info!(route = route.path(), "navigate");
    store.set(AppRoute::PATH, AppRoute::from(route));
}
