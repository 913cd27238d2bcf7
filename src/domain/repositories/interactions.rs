use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::interactions::Interaction;

#[async_trait]
#[automock]
pub trait InteractionRepository {
    /// Recent rated interactions. The sample-backed implementation ignores
    /// any time window.
    async fn list_recent(&self) -> Result<Vec<Interaction>>;
}
