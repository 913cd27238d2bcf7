use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::invoices::InvoiceRow;
use crate::domain::repositories::invoices::InvoiceRepository;
use crate::infrastructure::supabase::supabase_rest::SupabaseRestClient;

pub struct InvoiceSupabase {
    client: Arc<SupabaseRestClient>,
}

impl InvoiceSupabase {
    pub fn new(client: Arc<SupabaseRestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoiceRepository for InvoiceSupabase {
    async fn list_paid_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<InvoiceRow>> {
        let filters = [
            ("status", "eq.paid".to_string()),
            (
                "updated_at",
                format!("gte.{}", from.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ),
            (
                "updated_at",
                format!("lte.{}", to.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ),
        ];

        self.client.select("invoices", &filters).await
    }
}
