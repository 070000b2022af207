//! App lifecycle handler implementations.

use brewlog_flux::StateStore;
use tracing::{debug, info, warn};

use super::helpers;
use crate::api::BrewApi;
use crate::request::*;
use crate::state::*;

/// Handle `app/initialize`.
pub async fn handle_initialize(store: &StateStore, api: &dyn BrewApi) {
    helpers::discard_draft(store);
    store.set(FlowState::PATH, FlowState::idle());
    store.set(BrewFeed::PATH, BrewFeed::empty());
    helpers::navigate(store, Route::Feed);
    handle_feed_load(store, api).await;
}

/// Handle `feed/load`. Always asks the API; never patches the list locally.
///
/// Refused while a brew is submitting: the reload after a create must be
/// the only `get_brews` call once `create_brew` has started.
pub async fn handle_feed_load(store: &StateStore, api: &dyn BrewApi) {
    if helpers::flow(store).is_submitting() {
        warn!("feed load refused while submitting");
        return;
    }
    let previous = store
        .get_as::<BrewFeed>(BrewFeed::PATH)
        .unwrap_or_else(BrewFeed::empty);
    store.set(BrewFeed::PATH, BrewFeed {
        loading: true,
        error: None,
        ..previous.clone()
    });

    match api.get_brews().await {
        Ok(brews) => {
            debug!(count = brews.len(), "feed loaded");
            store.set(BrewFeed::PATH, BrewFeed { brews, loading: false, error: None });
        }
        Err(e) => {
            warn!(error = %e, "feed load failed");
            store.set(BrewFeed::PATH, BrewFeed {
                brews: previous.brews,
                loading: false,
                error: Some(e.to_string()),
            });
        }
    }
}

/// Handle `app/navigate`.
///
/// Leaving for the feed discards an unfinished draft. Nothing moves
/// while a submission is in flight.
pub async fn handle_navigate(req: &NavigateReq, store: &StateStore) {
    let flow = helpers::flow(store);
    if flow.is_submitting() {
        warn!(route = req.route.path(), "navigation refused while submitting");
        return;
    }

    match req.route {
        Route::Feed => {
            if flow.is_adding() {
                info!(step = ?flow.step, "unfinished draft discarded");
                helpers::discard_draft(store);
                store.set(FlowState::PATH, FlowState::idle());
            }
            helpers::navigate(store, Route::Feed);
        }
        Route::BrewCreation if flow.is_adding() => {
            helpers::navigate(store, Route::BrewCreation);
        }
        Route::BrewCreation => {
            warn!("no brew in progress; emit {} to start one", AddNewBrewReq::PATH);
        }
    }
}
