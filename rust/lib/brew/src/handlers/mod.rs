//! Handler implementations and Flux wiring.
//!
//! `register_handlers` binds each request `PATH` to its handler, giving
//! it the typed payload, the store, and the explicit [`BrewContext`].

pub mod app_handlers;
pub mod brew_handlers;
pub mod helpers;

use std::sync::Arc;

use brewlog_flux::{Flux, StateStore};

use crate::api::BrewApi;
use crate::config::FlowConfig;
use crate::request::*;

/// Everything the handlers need beyond the store.
pub struct BrewContext {
    pub api: Arc<dyn BrewApi>,
    pub flow: FlowConfig,
}

impl BrewContext {
    pub fn new(api: Arc<dyn BrewApi>, flow: FlowConfig) -> Self {
        Self { api, flow }
    }
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<BrewContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        flux.on_request::<InitializeReq, _, _>(InitializeReq::PATH, move |_, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_initialize(&store, ctx.api.as_ref()).await;
            }
        });
    }

    // app/navigate
    flux.on_request::<NavigateReq, _, _>(NavigateReq::PATH, |req, store: Arc<StateStore>| async move {
        app_handlers::handle_navigate(&req, &store).await;
    });

    // feed/load
    {
        let ctx = ctx.clone();
        flux.on_request::<FeedLoadReq, _, _>(FeedLoadReq::PATH, move |_, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_feed_load(&store, ctx.api.as_ref()).await;
            }
        });
    }

    // brew/add
    flux.on_request::<AddNewBrewReq, _, _>(AddNewBrewReq::PATH, |_, store: Arc<StateStore>| async move {
        brew_handlers::handle_add(&store).await;
    });

    // brew/form/update-field
    {
        let ctx = ctx.clone();
        flux.on_request::<UpdateFieldReq, _, _>(UpdateFieldReq::PATH, move |req, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                brew_handlers::handle_update_field(&req, &store, &ctx.flow).await;
            }
        });
    }

    // brew/basics/submit
    flux.on_request::<SubmitBasicsReq, _, _>(SubmitBasicsReq::PATH, |_, store: Arc<StateStore>| async move {
        brew_handlers::handle_submit_basics(&store).await;
    });

    // brew/customization/submit
    flux.on_request::<SubmitCustomizationReq, _, _>(
        SubmitCustomizationReq::PATH,
        |_, store: Arc<StateStore>| async move {
            brew_handlers::handle_submit_customization(&store).await;
        },
    );

    // brew/save
    flux.on_request::<SaveBrewReq, _, _>(SaveBrewReq::PATH, move |_, store: Arc<StateStore>| {
        let ctx = ctx.clone();
        async move {
            brew_handlers::handle_save(&store, ctx.api.as_ref()).await;
        }
    });
}
