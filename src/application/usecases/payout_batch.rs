use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::domain::repositories::payouts::{PayoutGateway, PayoutRepository};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayoutSummary {
    pub success_count: usize,
    pub fail_count: usize,
}

/// Processes pending payouts one at a time. A failed item is counted and
/// logged, never aborts the rest of the batch, and is not retried. Outcomes
/// are not written back to any store.
pub struct PayoutBatchUseCase<Repo, Gateway>
where
    Repo: PayoutRepository + Send + Sync + 'static,
    Gateway: PayoutGateway + Send + Sync + 'static,
{
    payout_repo: Arc<Repo>,
    gateway: Arc<Gateway>,
}

impl<Repo, Gateway> PayoutBatchUseCase<Repo, Gateway>
where
    Repo: PayoutRepository + Send + Sync + 'static,
    Gateway: PayoutGateway + Send + Sync + 'static,
{
    pub fn new(payout_repo: Arc<Repo>, gateway: Arc<Gateway>) -> Self {
        Self {
            payout_repo,
            gateway,
        }
    }

    pub async fn run(&self) -> Result<PayoutSummary> {
        let payouts = self.payout_repo.list_pending().await?;

        if payouts.is_empty() {
            info!("payouts: no pending payouts");
            return Ok(PayoutSummary::default());
        }

        info!(pending = payouts.len(), "payouts: starting batch");

        let mut summary = PayoutSummary::default();
        for payout in &payouts {
            match self.gateway.process(payout).await {
                Ok(()) => {
                    info!(
                        user_id = %payout.user_id,
                        amount = payout.amount,
                        gateway = %payout.gateway,
                        "payouts: payout processed"
                    );
                    summary.success_count += 1;
                }
                Err(err) => {
                    error!(
                        user_id = %payout.user_id,
                        amount = payout.amount,
                        gateway = %payout.gateway,
                        error = %err,
                        "payouts: payout failed"
                    );
                    summary.fail_count += 1;
                }
            }
        }

        info!(
            success_count = summary.success_count,
            fail_count = summary.fail_count,
            "payouts: batch completed"
        );

        Ok(summary)
    }
}
