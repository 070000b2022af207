//! Brew API contract and its transports.
//!
//! The flow handlers only see [`BrewApi`]; which transport backs it is
//! decided by whoever builds the [`BrewContext`](crate::handlers::BrewContext).

mod file;
mod http;
mod memory;

pub use file::FileBrewApi;
pub use http::HttpBrewApi;
pub use memory::MemoryBrewApi;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::options::{BrewingProcess, BrewingTechnique, GrindSize, Rating};

/// Payload for creating a brew: a finalized draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrewData {
    pub origin: String,
    pub roaster: String,
    pub technique: BrewingTechnique,
    pub process: BrewingProcess,
    pub water_dose: String,
    pub coffee_weight: String,
    pub temperature: String,
    pub grind_size: GrindSize,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

/// A persisted brew as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brew {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub origin: String,
    pub roaster: String,
    pub technique: BrewingTechnique,
    pub process: BrewingProcess,
    pub water_dose: String,
    pub coffee_weight: String,
    pub temperature: String,
    pub grind_size: GrindSize,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

impl Brew {
    pub fn from_create(id: Option<String>, data: CreateBrewData) -> Self {
        Self {
            id,
            origin: data.origin,
            roaster: data.roaster,
            technique: data.technique,
            process: data.process,
            water_dose: data.water_dose,
            coffee_weight: data.coffee_weight,
            temperature: data.temperature,
            grind_size: data.grind_size,
            rating: data.rating,
            created_at: data.created_at,
        }
    }
}

/// Backend operations the brewing flow depends on.
#[async_trait::async_trait]
pub trait BrewApi: Send + Sync + 'static {
    /// Persist a new brew. Resolves once the backend acknowledged it.
    async fn create_brew(&self, data: CreateBrewData) -> Result<(), ApiError>;

    /// All persisted brews, in the backend's feed order.
    async fn get_brews(&self) -> Result<Vec<Brew>, ApiError>;
}

/// Fresh id for backends that assign their own.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
