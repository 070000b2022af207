//! App lifecycle requests.

use crate::state::Route;

/// Initialize state and load the feed.
#[derive(Debug, Clone)]
pub struct InitializeReq;

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}

/// Navigate to a logical destination.
#[derive(Debug, Clone)]
pub struct NavigateReq {
    pub route: Route,
}

impl NavigateReq {
    pub const PATH: &'static str = "app/navigate";
}

/// Reload the feed from the API.
#[derive(Debug, Clone)]
pub struct FeedLoadReq;

impl FeedLoadReq {
    pub const PATH: &'static str = "feed/load";
}
