use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::domain::entities::invoices::InvoiceRow;

#[async_trait]
#[automock]
pub trait InvoiceRepository {
    /// Paid invoices whose `updated_at` falls within `[from, to]` inclusive.
    async fn list_paid_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<InvoiceRow>>;
}
