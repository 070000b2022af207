//! Brewing flow handler implementations.
//!
//! Step order is Basics → Customization → Rating → Submitting. Every
//! handler checks the current step first, so no request can skip ahead.

use brewlog_flux::StateStore;
use chrono::Utc;
use tracing::{debug, info, warn};

use super::helpers;
use super::app_handlers;
use crate::api::BrewApi;
use crate::config::{FlowConfig, RetryPolicy};
use crate::form::{BasicsStep, CustomizationStep, FormState, FormStep, RatingStep, StepForm};
use crate::request::*;
use crate::state::*;

/// Handle `brew/add`. Starts over with a fresh draft.
pub async fn handle_add(store: &StateStore) {
    let flow = helpers::flow(store);
    if flow.is_submitting() {
        warn!("add new brew refused while submitting");
        return;
    }
    if flow.is_adding() {
        debug!(step = ?flow.step, "replacing unfinished draft");
    }

    store.set(BrewDraft::PATH, BrewDraft::new());
    store.set(FormState::PATH, BasicsStep::open(None));
    store.set(FlowState::PATH, FlowState::at(FlowStep::Basics));
    helpers::navigate(store, Route::BrewCreation);
}

/// Handle `brew/form/update-field`.
pub async fn handle_update_field(req: &UpdateFieldReq, store: &StateStore, config: &FlowConfig) {
    let flow = helpers::flow(store);
    let Some(step) = flow.form_step() else {
        warn!(field = %req.field, "no brew in progress");
        return;
    };
    if flow.is_submitting() {
        warn!(field = %req.field, "form is locked while submitting");
        return;
    }
    let Some(mut form) = helpers::form(store, step) else {
        return;
    };
    if !form.set_value(&req.field, &req.value) {
        warn!(field = %req.field, ?step, "unknown form field");
        return;
    }
    store.set(FormState::PATH, form);

    if flow.step == FlowStep::Error && config.retry_after_failure == RetryPolicy::AfterEdit {
        info!("rating edited after a failed save; saving re-enabled");
        store.set(FlowState::PATH, FlowState::at(FlowStep::Rating));
    }
}

/// Handle `brew/basics/submit`.
pub async fn handle_submit_basics(store: &StateStore) {
    if !helpers::expect_step(store, FlowStep::Basics, SubmitBasicsReq::PATH) {
        return;
    }
    let Some(mut form) = helpers::form(store, FormStep::Basics) else {
        return;
    };
    let mut draft = helpers::draft(store);

    if BasicsStep::submit(&mut form, |values| draft.apply_basics(values)) {
        let next = CustomizationStep::open(Some(&draft.customization()));
        store.set(BrewDraft::PATH, draft);
        store.set(FormState::PATH, next);
        store.set(FlowState::PATH, FlowState::at(FlowStep::Customization));
    } else {
        debug!(errors = ?form.errors, "basics invalid");
        store.set(FormState::PATH, form);
    }
}

/// Handle `brew/customization/submit`.
pub async fn handle_submit_customization(store: &StateStore) {
    if !helpers::expect_step(store, FlowStep::Customization, SubmitCustomizationReq::PATH) {
        return;
    }
    let Some(mut form) = helpers::form(store, FormStep::Customization) else {
        return;
    };
    let mut draft = helpers::draft(store);

    if CustomizationStep::submit(&mut form, |values| draft.apply_customization(values)) {
        store.set(BrewDraft::PATH, draft);
        store.set(FormState::PATH, RatingStep::open(None));
        store.set(FlowState::PATH, FlowState::at(FlowStep::Rating));
    } else {
        debug!(errors = ?form.errors, "customization invalid");
        store.set(FormState::PATH, form);
    }
}

/// Handle `brew/save`: rate, stamp, create, then reload the feed.
///
/// The flow is claimed (Rating → Submitting) before anything is read, so
/// of two racing saves only one gets past the first line. Validation
/// failures hand the flow back to Rating. The feed reload starts only
/// after `create_brew` resolved. On failure the rating step stays with
/// saving disabled and the draft kept.
pub async fn handle_save(store: &StateStore, api: &dyn BrewApi) {
    if !helpers::begin_submit(store) {
        warn!(
            request = SaveBrewReq::PATH,
            actual = ?helpers::flow(store).step,
            "request rejected: flow is not at rating"
        );
        return;
    }
    let Some(mut form) = helpers::form(store, FormStep::Rating) else {
        store.set(FlowState::PATH, FlowState::at(FlowStep::Rating));
        return;
    };
    let mut draft = helpers::draft(store);

    let rated = RatingStep::submit(&mut form, |values| draft.rating = Some(values.rating));
    store.set(FormState::PATH, form);
    if !rated {
        debug!("rating missing");
        store.set(FlowState::PATH, FlowState::at(FlowStep::Rating));
        return;
    }

    draft.stamp(Utc::now());
    let data = match draft.finalize() {
        Ok(data) => data,
        Err(errors) => {
            let fields: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            warn!(?fields, "draft incomplete; not submitting");
            store.set(BrewDraft::PATH, draft);
            store.set(FlowState::PATH, FlowState {
                step: FlowStep::Rating,
                error: Some(format!("incomplete brew: {}", fields.join(", "))),
            });
            return;
        }
    };

    store.set(BrewDraft::PATH, draft);
    info!(origin = %data.origin, technique = %data.technique, "submitting brew");

    match api.create_brew(data).await {
        Ok(()) => {
            info!("brew saved");
            store.set(FlowState::PATH, FlowState::at(FlowStep::Done));
            app_handlers::handle_feed_load(store, api).await;
            helpers::discard_draft(store);
            helpers::navigate(store, Route::Feed);
        }
        Err(e) => {
            warn!(error = %e, "brew submission failed");
            store.set(FlowState::PATH, FlowState::failed(e.to_string()));
        }
    }
}
