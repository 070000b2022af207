//! App-level state — stored at `app/route`.

use serde::{Deserialize, Serialize};

/// Logical destinations the flow can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Feed,
    BrewCreation,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Feed => "/feed",
            Route::BrewCreation => "/brew/new",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/feed" => Some(Route::Feed),
            "/brew/new" => Some(Route::BrewCreation),
            _ => None,
        }
    }
}

/// Navigation route. Platforms map it onto their own router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRoute(pub String);

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.0)
    }
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        AppRoute(route.path().to_string())
    }
}
