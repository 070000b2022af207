//! Brew log — add, rate, and list coffee brews.
//!
//! Structure:
//! - `options` / `form` — option sets and the three form steps
//! - `state` — state stored at well-known paths (`app/route`, `brew/flow`, ...)
//! - `request` — request payloads a renderer emits
//! - `handlers` — the brewing flow, wired into a [`Flux`] instance
//! - `api` — the backend contract and its transports
//! - `summary` — read-only feed rendering
//!
//! ```ignore
//! let flux = brewlog::app(Arc::new(MemoryBrewApi::new()), FlowConfig::default());
//! flux.emit(InitializeReq::PATH, InitializeReq).await;
//! flux.emit(AddNewBrewReq::PATH, AddNewBrewReq).await;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod options;
pub mod request;
pub mod state;
pub mod summary;

use std::sync::Arc;

pub use brewlog_flux::Flux;

pub use api::{Brew, BrewApi, CreateBrewData};
pub use config::{BrewlogConfig, FlowConfig, RetryPolicy};
pub use error::{ApiError, ConfigError, ValidationError};
pub use handlers::{register_handlers, BrewContext};

/// A Flux instance with every brew handler registered.
pub fn app(api: Arc<dyn BrewApi>, flow: FlowConfig) -> Flux {
    let flux = Flux::new();
    register_handlers(&flux, Arc::new(BrewContext::new(api, flow)));
    flux
}
