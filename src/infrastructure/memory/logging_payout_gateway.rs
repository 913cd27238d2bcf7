use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::payouts::Payout;
use crate::domain::repositories::payouts::PayoutGateway;

/// Logging stand-in for real transfer calls. Always succeeds; the payout
/// status is not written back anywhere.
pub struct LoggingPayoutGateway;

impl LoggingPayoutGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingPayoutGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayoutGateway for LoggingPayoutGateway {
    async fn process(&self, payout: &Payout) -> Result<()> {
        info!(
            user_id = %payout.user_id,
            amount = payout.amount,
            gateway = %payout.gateway,
            "payouts: would transfer via gateway"
        );
        Ok(())
    }
}
