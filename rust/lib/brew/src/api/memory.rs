use tokio::sync::RwLock;
use tracing::debug;

use super::{new_id, Brew, BrewApi, CreateBrewData};
use crate::error::ApiError;

/// Process-local backend. Feed order is most recent first.
#[derive(Default)]
pub struct MemoryBrewApi {
    brews: RwLock<Vec<Brew>>,
}

impl MemoryBrewApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brews(brews: Vec<Brew>) -> Self {
        Self {
            brews: RwLock::new(brews),
        }
    }
}

#[async_trait::async_trait]
impl BrewApi for MemoryBrewApi {
    async fn create_brew(&self, data: CreateBrewData) -> Result<(), ApiError> {
        let brew = Brew::from_create(Some(new_id()), data);
        debug!(id = ?brew.id, "memory: brew created");
        self.brews.write().await.insert(0, brew);
        Ok(())
    }

    async fn get_brews(&self) -> Result<Vec<Brew>, ApiError> {
        Ok(self.brews.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;

    #[tokio::test]
    async fn newest_brew_comes_first() {
        let api = MemoryBrewApi::new();
        let mut second = fixtures::guji();
        second.origin = "Colombia Huila".into();

        api.create_brew(fixtures::guji()).await.unwrap();
        api.create_brew(second).await.unwrap();

        let brews = api.get_brews().await.unwrap();
        assert_eq!(brews.len(), 2);
        assert_eq!(brews[0].origin, "Colombia Huila");
        assert_eq!(brews[1].origin, "Ethiopia Guji");
        assert!(brews.iter().all(|b| b.id.is_some()));
        assert_ne!(brews[0].id, brews[1].id);
    }
}
