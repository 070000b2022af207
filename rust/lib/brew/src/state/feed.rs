//! Feed state — stored at `feed/brews`.

use serde::Serialize;

use crate::api::Brew;

/// Saved brews, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewFeed {
    pub brews: Vec<Brew>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BrewFeed {
    pub const PATH: &'static str = "feed/brews";

    pub fn empty() -> Self {
        Self {
            brews: Vec::new(),
            loading: false,
            error: None,
        }
    }
}
