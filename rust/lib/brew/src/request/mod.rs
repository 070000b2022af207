//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH` const; a
//! renderer emits it with `flux.emit(Req::PATH, req)`.

pub mod app;
pub mod brew;

pub use app::{FeedLoadReq, InitializeReq, NavigateReq};
pub use brew::{
    AddNewBrewReq, SaveBrewReq, SubmitBasicsReq, SubmitCustomizationReq, UpdateFieldReq,
};
