use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Brew, BrewApi, CreateBrewData};
use crate::error::ApiError;

/// HTTP backend: `POST {base}/brews` and `GET {base}/brews`.
pub struct HttpBrewApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBrewApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn brews_url(&self) -> String {
        format!("{}/brews", self.base_url)
    }

    /// Map non-2xx responses to `ApiError::Server`.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        let resp = Self::check(resp).await?;
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

#[async_trait::async_trait]
impl BrewApi for HttpBrewApi {
    async fn create_brew(&self, data: CreateBrewData) -> Result<(), ApiError> {
        let url = self.brews_url();
        debug!(%url, "POST brew");
        let resp = self.http.post(&url).json(&data).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn get_brews(&self) -> Result<Vec<Brew>, ApiError> {
        let url = self.brews_url();
        debug!(%url, "GET brews");
        let resp = self.http.get(&url).send().await?;
        Self::parse(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpBrewApi::new("http://localhost:3000/api/");
        assert_eq!(api.brews_url(), "http://localhost:3000/api/brews");
    }
}
