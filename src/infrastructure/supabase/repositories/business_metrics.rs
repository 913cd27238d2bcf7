use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::business_metrics::DailyRevenueUpsert;
use crate::domain::repositories::business_metrics::BusinessMetricsRepository;
use crate::infrastructure::supabase::supabase_rest::SupabaseRestClient;

pub struct BusinessMetricsSupabase {
    client: Arc<SupabaseRestClient>,
}

impl BusinessMetricsSupabase {
    pub fn new(client: Arc<SupabaseRestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BusinessMetricsRepository for BusinessMetricsSupabase {
    async fn upsert_daily_revenue(&self, record: DailyRevenueUpsert) -> Result<()> {
        self.client
            .upsert("business_metrics", "business_id,date", &record)
            .await
    }
}
