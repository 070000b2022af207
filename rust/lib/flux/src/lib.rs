//! Flux — path-addressed state engine for the brew log.
//!
//! Rust owns all state and logic; a platform (CLI, web, mobile) renders
//! what it reads and emits requests back.
//!
//! # Three Primitives
//!
//! - `get(path)` — read state at a path, Arc zero-copy
//! - `emit(path, payload)` — send a request to the handler(s) matching the path
//! - `subscribe(pattern)` — observe state changes under a pattern
//!
//! # Path Addressing
//!
//! State and requests share one flat namespace with `/` as separator:
//! - State: `app/route`, `brew/flow`, `feed/brews`
//! - Requests: `brew/add`, `brew/basics/submit`
//!
//! Patterns use MQTT-style wildcards: `+` matches exactly one level,
//! `#` matches all remaining levels (and must be the last segment).
//!
//! # Example
//!
//! ```ignore
//! use brewlog_flux::Flux;
//!
//! let flux = Flux::new();
//!
//! flux.on("app/initialize", |_, _, store| async move {
//!     store.set("app/route", "/feed".to_string());
//! });
//!
//! flux.subscribe("app/#", |path, _value| {
//!     println!("state changed: {}", path);
//! });
//!
//! flux.emit("app/initialize", ()).await;
//! ```

pub mod app;
pub mod pattern;
pub mod router;
pub mod store;
pub mod value;

pub use app::Flux;
pub use router::{BoxFuture, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
