use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::payouts::Payout;
use crate::domain::repositories::payouts::PayoutRepository;

/// Fixed sample data standing in for the payout queue; no real "pending"
/// filter is applied.
pub struct SamplePayoutRepository {
    payouts: Vec<Payout>,
}

impl SamplePayoutRepository {
    pub fn new() -> Self {
        Self {
            payouts: vec![
                Payout {
                    user_id: Uuid::new_v4(),
                    amount: 125.50,
                    gateway: "stripe".to_string(),
                },
                Payout {
                    user_id: Uuid::new_v4(),
                    amount: 89.00,
                    gateway: "paypal".to_string(),
                },
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            payouts: Vec::new(),
        }
    }
}

impl Default for SamplePayoutRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayoutRepository for SamplePayoutRepository {
    async fn list_pending(&self) -> Result<Vec<Payout>> {
        Ok(self.payouts.clone())
    }
}
