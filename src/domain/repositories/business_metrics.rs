use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::business_metrics::DailyRevenueUpsert;

#[async_trait]
#[automock]
pub trait BusinessMetricsRepository {
    /// Insert-or-update keyed by `(business_id, date)`.
    async fn upsert_daily_revenue(&self, record: DailyRevenueUpsert) -> Result<()>;
}
