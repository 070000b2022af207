//! State definitions.
//!
//! Each file defines state stored at a well-known path; renderers read
//! these paths and subscribe to their changes.

pub mod app;
pub mod draft;
pub mod feed;
pub mod flow;

pub use app::{AppRoute, Route};
pub use draft::BrewDraft;
pub use feed::BrewFeed;
pub use flow::{Controls, FlowState, FlowStep};

pub use crate::form::FormState;
