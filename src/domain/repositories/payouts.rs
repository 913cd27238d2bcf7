use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::payouts::Payout;

#[async_trait]
#[automock]
pub trait PayoutRepository {
    async fn list_pending(&self) -> Result<Vec<Payout>>;
}

#[async_trait]
#[automock]
pub trait PayoutGateway {
    /// Attempts a single payout. Failures are isolated per item by the batch.
    async fn process(&self, payout: &Payout) -> Result<()>;
}
